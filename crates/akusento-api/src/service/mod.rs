//! Service module

mod accent_api_service;

pub use accent_api_service::{AccentApiService, AccentApiServiceFull};
