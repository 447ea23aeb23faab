//! Terminal rendering of rounds

use akusento::WordAnalysis;
use akusento::game::{GameRound, MatchPolicy, RoundStatus};
use console::style;

use crate::session::Score;

/// "機械学習（キカイガクシュウ） キ[カイガ]クシュウ"
pub fn word_line(word: &WordAnalysis) -> String {
  format!("{}（{}） {}", word.text, word.reading, word.accent_code)
}

/// Prompt shown for a freshly started round
pub fn target_banner(round: &GameRound) -> String {
  format!(
    "{} {}",
    style("お題:").cyan().bold(),
    word_line(round.target())
  )
}

/// Outcome of a judged round with both accent codes
pub fn verdict(round: &GameRound) -> String {
  let headline = match round.status() {
    RoundStatus::Success => style("正解！ 同じアクセントです").green().bold().to_string(),
    RoundStatus::Failure => style("不正解… アクセントが違います").red().bold().to_string(),
    RoundStatus::Idle => return String::new(),
  };

  let mut lines = vec![headline, format!("  お題: {}", word_line(round.target()))];
  if let Some(guess) = round.guess() {
    lines.push(format!("  回答: {}", word_line(guess)));
  }
  lines.join("\n")
}

/// How guesses are judged, shown once at startup
pub fn policy_line(policy: MatchPolicy) -> String {
  let rule = match policy {
    MatchPolicy::Exact => "高低パターンの完全一致",
    MatchPolicy::SameClass => "アクセント型（平板・頭高・中高・尾高）の一致",
  };
  format!("判定: {rule}")
}

/// "3 / 5 正解"
pub fn score_line(score: Score) -> String {
  format!("{} / {} 正解", score.succeeded, score.played)
}
