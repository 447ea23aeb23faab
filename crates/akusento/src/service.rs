// crates/akusento/src/service.rs

//! AkusentoService: akusento クレートの統合ファサード。
//!
//! - 辞書管理 (DictionaryManager)
//! - アクセント解析 (AccentAnalyzer)
//! - 出題候補 (CandidatePool)
//!
//! HTTP 層などの外部からは、この構造体だけを意識すればよい。

use rand::Rng;
use tracing::{info, warn};

use crate::analyzer::AccentAnalyzer;
use crate::candidates::{CandidatePool, collect_seeds};
use crate::config::AkusentoConfig;
use crate::dictionary::DictionaryManager;
use crate::errors::error_definition::AkusentoResult;
use crate::models::WordAnalysis;

/// akusento クレートの統合ファサード。
///
/// 辞書と候補プールは初期化後は読み取り専用のため、`Arc` で共有して
/// 複数リクエストから同時に利用できる。
pub struct AkusentoService {
  /// アクセント解析器
  analyzer: AccentAnalyzer,

  /// 出題候補
  pool: CandidatePool,
}

impl AkusentoService {
  /// 初期化（設定検証 + 辞書ロード + 候補プール構築）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. DictionaryManager で辞書をロード（初回はダウンロード）
  /// 3. スナップショットがあれば読み込み、なければ種語から候補を構築
  ///
  /// # エラー
  /// - 設定が不正（アクセント情報のない辞書、モーラ範囲の逆転等）
  /// - 辞書ロード失敗
  /// - 種語ファイル・スナップショットの入出力失敗
  pub fn init(config: &AkusentoConfig) -> AkusentoResult<Self> {
    config.validate()?;

    let manager = DictionaryManager::from_config(config)?;
    let dict = manager.load()?;
    let analyzer = AccentAnalyzer::from_shared_dictionary(dict);

    let pool = load_or_build_pool(config, &analyzer)?;
    if pool.is_empty() {
      warn!("出題候補が 0 件です。target-word は常に失敗します");
    }

    Ok(Self { analyzer, pool })
  }

  /// 既に用意された解析器と候補プールから組み立てる
  pub fn from_parts(analyzer: AccentAnalyzer, pool: CandidatePool) -> Self {
    Self { analyzer, pool }
  }

  /// テキストの読みとアクセントを解析する
  ///
  /// # エラー
  /// - 空テキスト
  /// - 読みを決定できないトークンを含む
  pub fn analyze(&self, text: &str) -> AkusentoResult<WordAnalysis> {
    Ok(self.analyzer.analyze(text)?)
  }

  /// モーラ数の範囲内から出題語を 1 つランダムに選ぶ
  ///
  /// # エラー
  /// - 範囲の逆転
  /// - 範囲内に候補がない
  pub fn target_word(&self, min_mora: usize, max_mora: usize) -> AkusentoResult<WordAnalysis> {
    self.target_word_with_rng(min_mora, max_mora, &mut rand::rng())
  }

  /// 乱数生成器を指定して出題語を選ぶ
  pub fn target_word_with_rng<R: Rng + ?Sized>(
    &self,
    min_mora: usize,
    max_mora: usize,
    rng: &mut R,
  ) -> AkusentoResult<WordAnalysis> {
    Ok(self.pool.pick(min_mora, max_mora, rng)?.clone())
  }

  /// 出題候補プール
  pub fn pool(&self) -> &CandidatePool {
    &self.pool
  }
}

/// スナップショットがあれば読み込み、なければ種語から構築する。
///
/// スナップショットのパスが設定されていて未作成の場合は、構築結果を書き出す。
pub fn load_or_build_pool(
  config: &AkusentoConfig,
  analyzer: &AccentAnalyzer,
) -> AkusentoResult<CandidatePool> {
  if let Some(snapshot) = config.snapshot_file()
    && snapshot.is_file()
  {
    return Ok(CandidatePool::load_json(snapshot)?);
  }

  let seeds = collect_seeds(config.seed_file())?;
  let (min_mora, max_mora) = config.mora_range();
  let (pool, report) =
    CandidatePool::build(&seeds, min_mora, max_mora, |seed| analyzer.analyze(seed));

  info!(
    candidates = pool.len(),
    failed = report.failed,
    "種語から出題候補を構築しました"
  );

  if let Some(snapshot) = config.snapshot_file() {
    pool.save_json(snapshot)?;
  }

  Ok(pool)
}
