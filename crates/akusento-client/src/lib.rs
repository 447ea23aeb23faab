//! akusento-client crate
//!
//! Terminal client for the pitch-accent guessing game. Fetches a target word
//! from akusento-api, analyzes the player's guess and judges it locally.

pub mod client;
pub mod errors;
pub mod render;
pub mod session;

pub use client::AccentApiClient;
pub use errors::{ClientError, Result};
pub use session::{GameSession, Score};
