//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT, MAX_TEXT_LENGTH, SERVICE_NAME};
pub use env::Config;
