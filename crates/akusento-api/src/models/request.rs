//! リクエストモデル定義

use akusento::config::{DEFAULT_MAX_MORA, DEFAULT_MIN_MORA};
use serde::{Deserialize, Deserializer, de};

/// アクセント解析リクエスト
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
  /// 解析対象のテキスト
  pub text: String,
}

/// 出題語リクエストのクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct TargetWordQuery {
  /// モーラ数の下限
  #[serde(default, deserialize_with = "empty_as_none")]
  pub min_mora: Option<usize>,
  /// モーラ数の上限
  #[serde(default, deserialize_with = "empty_as_none")]
  pub max_mora: Option<usize>,
}

/// `?min_mora=` のような空の値を省略扱いにする
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw: Option<String> = Option::deserialize(deserializer)?;
  match raw.as_deref().map(str::trim) {
    None | Some("") => Ok(None),
    Some(value) => value.parse().map(Some).map_err(de::Error::custom),
  }
}

impl TargetWordQuery {
  /// 省略された値をデフォルト (2, 10) で補った範囲
  #[must_use]
  pub fn mora_range(&self) -> (usize, usize) {
    (
      self.min_mora.unwrap_or(DEFAULT_MIN_MORA),
      self.max_mora.unwrap_or(DEFAULT_MAX_MORA),
    )
  }
}
