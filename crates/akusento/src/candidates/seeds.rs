//! 出題候補の種語リスト

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::errors::CandidateError;

/// 組み込みの種語（同音異アクセントの基本語・一般名詞・複合語）
pub const DEFAULT_SEEDS: &[&str] = &[
  "箸", "橋", "端", "雨", "飴", "亀", "瓶", "愛", "青", "赤", "秋", "朝", "足", "味", "汗", "油",
  "家", "池", "石", "椅子", "犬", "命", "海", "駅", "絵", "円", "王", "音", "歌", "馬",
  "機械学習", "人工知能", "深層学習", "自然言語処理", "画像認識",
  "東京", "大阪", "京都", "北海道", "沖縄", "富士山", "桜", "寿司", "天ぷら", "忍者",
  "侍", "相撲", "着物", "漢字", "平仮名", "片仮名", "日本", "世界", "平和", "未来", "宇宙",
  "科学", "技術", "数学", "物理", "化学", "生物", "歴史", "地理", "音楽", "美術", "体育", "英語",
];

/// 種語ファイル（1行1語、空行は無視）を読み込む
///
/// # Errors
/// ファイルの読み込みに失敗した場合
pub fn read_seed_file(path: &Path) -> Result<Vec<String>, CandidateError> {
  let content = std::fs::read_to_string(path).map_err(|e| CandidateError::Io {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;

  let words: Vec<String> = content
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(str::to_string)
    .collect();

  info!(path = %path.display(), count = words.len(), "種語ファイルを読み込みました");

  Ok(words)
}

/// 組み込み種語と追加ファイルを合わせ、重複を除いてソートした種語列を返す
///
/// # Errors
/// 追加ファイルの読み込みに失敗した場合
pub fn collect_seeds(extra: Option<&Path>) -> Result<Vec<String>, CandidateError> {
  let mut seeds: Vec<String> = DEFAULT_SEEDS.iter().map(|s| (*s).to_string()).collect();

  if let Some(path) = extra {
    seeds.extend(read_seed_file(path)?);
  }

  seeds.sort();
  seeds.dedup();
  Ok(seeds)
}
