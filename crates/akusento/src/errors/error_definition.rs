//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::config::DictionaryPreset;

/// 設定（AkusentoConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// アクセント情報を持たない辞書が指定された
  #[error("辞書 {preset:?} はアクセント情報 (aType) を持ちません。unidic-cwj か unidic-csj を指定してください")]
  PresetWithoutAccent {
    /// 指定されたプリセット
    preset: DictionaryPreset,
  },

  /// candidates.min_mora < 1
  #[error("candidates.min_mora は 1 以上である必要があります: actual={actual}")]
  InvalidMinMora {
    /// 実際に指定された値
    actual: usize,
  },

  /// candidates.max_mora < candidates.min_mora
  #[error(
    "candidates.max_mora は candidates.min_mora 以上である必要があります: \
     min_mora={min_mora}, max_mora={max_mora}"
  )]
  InvalidMoraRange {
    /// candidates.min_mora
    min_mora: usize,
    /// candidates.max_mora
    max_mora: usize,
  },

  /// candidates.seed_file が存在しない
  #[error("candidates.seed_file が見つかりません: path={path:?}")]
  SeedFileNotFound {
    /// 指定されたパス
    path: PathBuf,
  },

  /// dictionary.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("dictionary.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir の作成に失敗
  #[error("dictionary.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// 辞書関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// 辞書パスが不正または辞書種別が不正
  #[error("辞書パスまたは辞書種別が不正です: path={0}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(PathBuf, Option<PresetDictionaryKind>),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// アクセント解析関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// 辞書起因のエラー
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),

  /// 入力テキストが不正（空文字列など）
  #[error("解析対象の入力テキストが不正: {reason}")]
  InvalidInput {
    /// 不正の理由
    reason: String,
  },

  /// 読みが得られないトークンを含む
  #[error("読みを決定できませんでした: text={text}, surface={surface}")]
  Unanalyzable {
    /// 入力テキスト
    text: String,
    /// 読みが得られなかったトークンの表層形
    surface: String,
  },
}

/// 出題候補関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CandidateError {
  /// モーラ数の範囲指定が不正
  #[error("モーラ数の範囲が不正です: min_mora={min_mora}, max_mora={max_mora}")]
  InvalidRange {
    /// 下限
    min_mora: usize,
    /// 上限
    max_mora: usize,
  },

  /// 範囲内に候補が存在しない
  #[error("指定範囲に出題候補がありません: min_mora={min_mora}, max_mora={max_mora}")]
  NoCandidate {
    /// 下限
    min_mora: usize,
    /// 上限
    max_mora: usize,
  },

  /// 候補ファイルの読み書きに失敗
  #[error("候補ファイルの入出力に失敗しました: path={path:?}, error={source}")]
  Io {
    /// 対象パス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 候補スナップショットの JSON 変換に失敗
  #[error("候補スナップショットの JSON 変換に失敗しました: path={path:?}, error={source}")]
  Snapshot {
    /// 対象パス
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// ゲーム進行関連のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
  /// 比較対象のどちらかにアクセントパターンがない
  #[error("アクセントパターンがないため比較できません: {side}")]
  MissingPattern {
    /// "target" または "guess"
    side: &'static str,
  },

  /// 既に判定済みのラウンドに回答しようとした
  #[error("このラウンドは既に終了しています")]
  RoundFinished,
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `AkusentoResult<T>` = `Result<T, AkusentoError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AkusentoError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// アクセント解析関連エラー
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),

  /// 出題候補関連エラー
  #[error(transparent)]
  Candidate(#[from] CandidateError),

  /// ゲーム進行関連エラー
  #[error(transparent)]
  Game(#[from] GameError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// akusento クレートの標準 Result 型エイリアス
pub type AkusentoResult<T> = Result<T, AkusentoError>;
