//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::AccentApiService;

/// Application State
///
/// State shared across the entire server.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Accent service
  ///
  /// - Production: `Arc::new(AccentApiServiceFull::new(&config)?)`
  /// - Test: a stub that never touches the dictionary
  pub service: Arc<dyn AccentApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn AccentApiService>) -> Self {
    Self { config, service }
  }
}
