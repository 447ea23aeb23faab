//! 出題候補のスナップショットを作成する
//!
//! 種語（組み込み + `AKUSENTO_SEED_FILE`）を解析し、
//! `AKUSENTO_CANDIDATES_FILE`（省略時 `candidates.json`）に書き出す。
//! サーバーは起動時にこのファイルがあれば解析をせずに読み込む。

use std::path::PathBuf;

use akusento::analyzer::AccentAnalyzer;
use akusento::candidates::{CandidatePool, collect_seeds};
use akusento::dictionary::DictionaryManager;
use akusento_api::ApiError;
use akusento_api::config::Config;
use akusento_api::init_tracing;

/// 出力先の既定ファイル名
const DEFAULT_OUTPUT: &str = "candidates.json";

fn main() -> Result<(), ApiError> {
  let config = Config::from_env()?;
  init_tracing(&config);

  let lib_config = config.to_akusento_config();
  lib_config.validate().map_err(|e| ApiError::config(e.to_string()))?;

  let manager = DictionaryManager::from_config(&lib_config)
    .map_err(|e| ApiError::config(format!("辞書マネージャの作成に失敗しました: {e}")))?;
  let dict =
    manager.load().map_err(|e| ApiError::config(format!("辞書のロードに失敗しました: {e}")))?;
  let analyzer = AccentAnalyzer::from_shared_dictionary(dict);

  let seeds = collect_seeds(lib_config.seed_file()).map_err(|e| ApiError::config(e.to_string()))?;
  let (min_mora, max_mora) = lib_config.mora_range();
  let (pool, report) =
    CandidatePool::build(&seeds, min_mora, max_mora, |seed| analyzer.analyze(seed));

  let output = config.candidates_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
  pool.save_json(&output).map_err(|e| ApiError::internal(e.to_string()))?;

  for (morae, count) in pool.mora_histogram() {
    tracing::info!(morae, count, "モーラ数別の候補数");
  }
  tracing::info!(
    path = %output.display(),
    added = report.added,
    failed = report.failed,
    "出題候補を書き出しました"
  );

  Ok(())
}
