//! 候補構築結果のレポート型定義

use serde::{Deserialize, Serialize};

/// `CandidatePool::build` の集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
  /// 入力された種語の総数
  pub total: usize,
  /// 候補として登録された件数
  pub added: usize,
  /// モーラ数が範囲外でスキップされた件数
  pub skipped_out_of_range: usize,
  /// 重複によりスキップされた件数
  pub skipped_duplicates: usize,
  /// 解析に失敗した件数
  pub failed: usize,
}

impl BuildReport {
  /// 全て登録されたか
  pub fn is_all_added(&self) -> bool {
    self.added == self.total
  }

  /// 合計件数を記録
  pub fn record_total(&mut self) {
    self.total += 1;
  }

  /// 登録成功を記録
  pub fn record_added(&mut self) {
    self.added += 1;
  }

  /// 範囲外スキップを記録
  pub fn record_out_of_range(&mut self) {
    self.skipped_out_of_range += 1;
  }

  /// 重複スキップを記録
  pub fn record_duplicate(&mut self) {
    self.skipped_duplicates += 1;
  }

  /// 解析失敗を記録
  pub fn record_failed(&mut self) {
    self.failed += 1;
  }
}
