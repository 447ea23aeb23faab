//! Accent analysis and target-word service

use akusento::{AkusentoService, WordAnalysis};
use tracing::debug;

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};

/// Common interface for the accent service
///
/// This trait allows swapping production implementation (`AccentApiServiceFull`) with
/// test stubs/mocks.
pub trait AccentApiService: Send + Sync {
  /// Reading and accent pattern of `text`
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, unanalyzable text)
  /// - Internal error
  fn analyze(&self, text: &str) -> Result<WordAnalysis>;

  /// One random candidate whose mora count lies in `[min_mora, max_mora]`
  ///
  /// # Errors
  /// - `min_mora > max_mora`
  /// - No candidate in range
  fn target_word(&self, min_mora: usize, max_mora: usize) -> Result<WordAnalysis>;
}

/// Validates the raw text of an analyze request
///
/// # Errors
/// - If text is empty or whitespace only
/// - If text exceeds maximum length
pub(crate) fn validate_text(text: &str) -> Result<()> {
  let text_bytes = text.len();
  if text.trim().is_empty() {
    return Err(ApiError::invalid_input("Text is empty"));
  }

  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
  }

  Ok(())
}

/// Accent service backed by the akusento library
pub struct AccentApiServiceFull {
  inner: AkusentoService,
}

impl AccentApiServiceFull {
  /// Initializes the service (dictionary load + candidate pool)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the dictionary fails to load
  pub fn new(config: &Config) -> Result<Self> {
    let inner = AkusentoService::init(&config.to_akusento_config())?;
    Ok(Self { inner })
  }

  /// Wraps an already initialized library service
  #[must_use]
  pub fn from_service(inner: AkusentoService) -> Self {
    Self { inner }
  }

  /// Underlying library service
  #[must_use]
  pub fn inner(&self) -> &AkusentoService {
    &self.inner
  }
}

/// Production implementation of trait `AccentApiService`
impl AccentApiService for AccentApiServiceFull {
  fn analyze(&self, text: &str) -> Result<WordAnalysis> {
    validate_text(text)?;
    let analysis = self.inner.analyze(text)?;
    debug!(text = %analysis.text, code = %analysis.accent_code, "解析完了");
    Ok(analysis)
  }

  fn target_word(&self, min_mora: usize, max_mora: usize) -> Result<WordAnalysis> {
    Ok(self.inner.target_word(min_mora, max_mora)?)
  }
}
