//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_root, get_target_word, health_check, post_analyze};
pub use routes::{create_router, run_server};
pub use state::AppState;
