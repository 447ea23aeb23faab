//! One round of the game
//!
//! ```text
//! idle --(guess, match)--> success
//! idle --(guess, no match)--> failure
//! success | failure --(next word)--> new round (idle)
//! ```

use serde::Serialize;
use tracing::debug;

use crate::errors::GameError;
use crate::game::matching::MatchPolicy;
use crate::models::WordAnalysis;

/// Status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
  /// Waiting for a guess
  Idle,
  /// The guess matched
  Success,
  /// The guess did not match
  Failure,
}

/// Target, guess and outcome of the current round
#[derive(Debug, Clone)]
pub struct GameRound {
  target: WordAnalysis,
  guess: Option<WordAnalysis>,
  status: RoundStatus,
}

/// Whether user input would be submitted at all (non-blank)
pub fn is_submittable(input: &str) -> bool {
  !input.trim().is_empty()
}

impl GameRound {
  /// Starts a round for `target`
  pub fn new(target: WordAnalysis) -> Self {
    Self {
      target,
      guess: None,
      status: RoundStatus::Idle,
    }
  }

  /// Target word
  pub fn target(&self) -> &WordAnalysis {
    &self.target
  }

  /// Judged guess, if any
  pub fn guess(&self) -> Option<&WordAnalysis> {
    self.guess.as_ref()
  }

  /// Current status
  pub fn status(&self) -> RoundStatus {
    self.status
  }

  /// Whether the round has been judged
  pub fn is_finished(&self) -> bool {
    self.status != RoundStatus::Idle
  }

  /// Judges `guess` and moves the round to success or failure.
  ///
  /// # Errors
  /// - `RoundFinished` if the round was already judged
  /// - `MissingPattern` if either side has no pattern (the round stays idle)
  pub fn submit_guess(
    &mut self,
    guess: WordAnalysis,
    policy: MatchPolicy,
  ) -> Result<RoundStatus, GameError> {
    if self.is_finished() {
      return Err(GameError::RoundFinished);
    }

    let matched = policy.judge(&self.target, &guess)?;
    self.status = if matched {
      RoundStatus::Success
    } else {
      RoundStatus::Failure
    };

    debug!(
      target_text = %self.target.text,
      guess_text = %guess.text,
      ?policy,
      status = ?self.status,
      "Guess judged"
    );

    self.guess = Some(guess);
    Ok(self.status)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn word(text: &str, pattern: Vec<u8>) -> WordAnalysis {
    let reading = "ア".repeat(pattern.len());
    WordAnalysis::new(text, reading, pattern)
  }

  #[test]
  fn new_round_is_idle() {
    let round = GameRound::new(word("箸", vec![2, 1]));
    assert_eq!(round.status(), RoundStatus::Idle);
    assert!(round.guess().is_none());
    assert!(!round.is_finished());
  }

  #[test]
  fn matching_guess_succeeds() {
    let mut round = GameRound::new(word("箸", vec![2, 1]));
    let status = round.submit_guess(word("雨", vec![2, 1]), MatchPolicy::Exact).unwrap();
    assert_eq!(status, RoundStatus::Success);
    assert_eq!(round.guess().map(|g| g.text.as_str()), Some("雨"));
  }

  #[test]
  fn longer_guess_fails() {
    let mut round = GameRound::new(word("箸", vec![2, 1]));
    let status = round.submit_guess(word("命", vec![1, 2, 1]), MatchPolicy::Exact).unwrap();
    assert_eq!(status, RoundStatus::Failure);
  }

  #[test]
  fn zero_valued_patterns_compare_too() {
    let mut round = GameRound::new(word("的", vec![0, 1, 1]));
    let status = round.submit_guess(word("同", vec![0, 1, 1]), MatchPolicy::Exact).unwrap();
    assert_eq!(status, RoundStatus::Success);
  }

  #[test]
  fn finished_round_rejects_another_guess() {
    let mut round = GameRound::new(word("箸", vec![2, 1]));
    round.submit_guess(word("橋", vec![1, 2]), MatchPolicy::Exact).unwrap();

    let err = round.submit_guess(word("雨", vec![2, 1]), MatchPolicy::Exact).unwrap_err();
    assert_eq!(err, GameError::RoundFinished);
    assert_eq!(round.status(), RoundStatus::Failure);
  }

  #[test]
  fn missing_pattern_leaves_round_idle() {
    let mut round = GameRound::new(word("箸", vec![2, 1]));
    let err = round.submit_guess(word("?", vec![]), MatchPolicy::Exact).unwrap_err();
    assert!(matches!(err, GameError::MissingPattern { side: "guess" }));
    assert_eq!(round.status(), RoundStatus::Idle);
    assert!(round.guess().is_none());
  }

  #[test]
  fn blank_input_is_not_submittable() {
    assert!(!is_submittable(""));
    assert!(!is_submittable("  \u{3000}"));
    assert!(is_submittable("箸"));
  }
}
