//! Game session: the current round plus the API calls that drive it

use akusento::game::{GameRound, MatchPolicy, RoundStatus, is_submittable};
use tracing::info;

use crate::client::AccentApiClient;
use crate::errors::{ClientError, Result};

/// Running tally across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
  /// Judged rounds
  pub played: usize,
  /// Rounds won
  pub succeeded: usize,
}

/// One player's session against the API.
///
/// Each method awaits its request before returning, so a session never has
/// more than one request in flight.
#[derive(Debug)]
pub struct GameSession {
  client: AccentApiClient,
  min_mora: usize,
  max_mora: usize,
  policy: MatchPolicy,
  round: Option<GameRound>,
  score: Score,
}

impl GameSession {
  /// Creates a session with no round started yet
  pub fn new(client: AccentApiClient, min_mora: usize, max_mora: usize, policy: MatchPolicy) -> Self {
    Self {
      client,
      min_mora,
      max_mora,
      policy,
      round: None,
      score: Score::default(),
    }
  }

  /// Current round, if one was started
  pub fn round(&self) -> Option<&GameRound> {
    self.round.as_ref()
  }

  /// Tally so far
  pub fn score(&self) -> Score {
    self.score
  }

  /// Comparison policy in use
  pub fn policy(&self) -> MatchPolicy {
    self.policy
  }

  /// Fetches a target word and starts a fresh idle round.
  ///
  /// On failure the previous round, if any, is left untouched.
  ///
  /// # Errors
  /// Transport failure or non-2xx status
  pub async fn start_round(&mut self) -> Result<&GameRound> {
    let target = self.client.target_word(self.min_mora, self.max_mora).await?;
    info!(text = %target.text, "New round");
    Ok(self.round.insert(GameRound::new(target)))
  }

  /// Abandons the current round (judged or not) and starts another.
  ///
  /// # Errors
  /// Same as [`GameSession::start_round`]
  pub async fn next_word(&mut self) -> Result<&GameRound> {
    self.start_round().await
  }

  /// Analyzes `input` and judges it against the target.
  ///
  /// Blank input is a no-op and returns `Ok(None)` without calling the API.
  ///
  /// # Errors
  /// - `NoRound` before the first round
  /// - `Game(RoundFinished)` if the round was already judged
  /// - transport failure or non-2xx status (the round stays idle)
  pub async fn submit(&mut self, input: &str) -> Result<Option<RoundStatus>> {
    if !is_submittable(input) {
      return Ok(None);
    }

    let round = self.round.as_mut().ok_or(ClientError::NoRound)?;
    if round.is_finished() {
      return Err(akusento::errors::GameError::RoundFinished.into());
    }

    let guess = self.client.analyze(input.trim()).await?;
    let status = round.submit_guess(guess, self.policy)?;

    self.score.played += 1;
    if status == RoundStatus::Success {
      self.score.succeeded += 1;
    }

    Ok(Some(status))
  }
}
