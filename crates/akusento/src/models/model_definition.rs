//! Data Model Definition
use serde::{Deserialize, Serialize};

use crate::accent::pattern::{AccentClass, render_accent_code};
use crate::kana::split_morae;

/// Reading and pitch accent of one piece of text.
///
/// This is the value exchanged between the service and the game client:
/// `{ text, reading, accent_pattern, accent_code }`, plus `accent_class`
/// when the kernel is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
  /// Input text (trimmed)
  pub text: String,

  /// Katakana reading
  pub reading: String,

  /// One pitch value per mora of `reading` (1 = low, 2 = high)
  pub accent_pattern: Vec<u8>,

  /// Display string such as `ハ[シ`
  pub accent_code: String,

  /// Named accent class
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub accent_class: Option<AccentClass>,
}

impl WordAnalysis {
  /// Builds an analysis from a reading and its pattern, rendering the accent code.
  pub fn new(text: impl Into<String>, reading: impl Into<String>, accent_pattern: Vec<u8>) -> Self {
    let reading = reading.into();
    let accent_code = render_accent_code(&split_morae(&reading), &accent_pattern);

    Self {
      text: text.into(),
      reading,
      accent_pattern,
      accent_code,
      accent_class: None,
    }
  }

  /// Builder that records the accent class
  #[must_use]
  pub fn with_class(mut self, class: AccentClass) -> Self {
    self.accent_class = Some(class);
    self
  }

  /// Mora count (length of the accent pattern)
  pub fn mora_count(&self) -> usize {
    self.accent_pattern.len()
  }

  /// Whether a pattern is present
  pub fn has_pattern(&self) -> bool {
    !self.accent_pattern.is_empty()
  }
}
