//! Accent comparison policy

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::accent::{AccentClass, kernel_from_pattern};
use crate::errors::GameError;
use crate::models::WordAnalysis;

/// Exact pattern equality: same length, same values in order.
///
/// A guess with a different mora count than the target never matches.
pub fn patterns_match(target: &[u8], guess: &[u8]) -> bool {
  target == guess
}

/// What "same accent" means when judging a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
  /// Patterns must be identical
  #[default]
  Exact,
  /// Accent classes must agree; mora counts may differ
  SameClass,
}

impl MatchPolicy {
  /// Judges `guess` against `target`.
  ///
  /// # Errors
  /// `MissingPattern` if either side has an empty accent pattern
  pub fn judge(&self, target: &WordAnalysis, guess: &WordAnalysis) -> Result<bool, GameError> {
    if !target.has_pattern() {
      return Err(GameError::MissingPattern { side: "target" });
    }
    if !guess.has_pattern() {
      return Err(GameError::MissingPattern { side: "guess" });
    }

    Ok(match self {
      Self::Exact => patterns_match(&target.accent_pattern, &guess.accent_pattern),
      Self::SameClass => class_of(target) == class_of(guess),
    })
  }
}

/// Accent class of a word; derived from the pattern when the service did not send one.
fn class_of(word: &WordAnalysis) -> AccentClass {
  word.accent_class.unwrap_or_else(|| {
    AccentClass::from_kernel(kernel_from_pattern(&word.accent_pattern), word.mora_count())
  })
}

impl FromStr for MatchPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "exact" => Ok(Self::Exact),
      "same-class" => Ok(Self::SameClass),
      _ => Err(format!("Unknown match policy: {}. Valid values: exact, same-class", s)),
    }
  }
}
