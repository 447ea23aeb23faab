//! akusento-api crate
//!
//! Web server providing pitch-accent analysis and target words for the guessing game.
//!
//! ## Endpoints
//! - `GET /api/target-word?min_mora=2&max_mora=10` - Random target word
//! - `POST /api/analyze` - Reading and accent pattern of a text
//! - `GET /` - Service status
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/api/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "機械学習"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, StatusResponse, TargetWordQuery};
pub use service::{AccentApiService, AccentApiServiceFull};

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins; otherwise the configured level applies.
pub fn init_tracing(config: &Config) {
  use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter()));

  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
}
