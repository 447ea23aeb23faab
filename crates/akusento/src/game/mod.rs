//! game module - accent comparison and round state
pub mod matching;
pub mod round;

/// 再エクスポート
pub use matching::{MatchPolicy, patterns_match};
pub use round::{GameRound, RoundStatus, is_submittable};
