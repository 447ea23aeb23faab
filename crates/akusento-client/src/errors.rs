//! クライアントのエラー定義

use akusento::errors::GameError;
use thiserror::Error;

/// クライアントエラー
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
  /// ベース URL が不正
  #[error("API の URL が不正です: {0}")]
  Url(#[from] url::ParseError),

  /// 接続失敗・タイムアウト・JSON 変換失敗
  #[error("通信に失敗しました: {0}")]
  Transport(#[from] reqwest::Error),

  /// 2xx 以外の応答
  #[error("サーバーがエラーを返しました: status={status}")]
  Status {
    /// HTTP ステータスコード
    status: u16,
  },

  /// 出題語がまだない状態で回答した
  #[error("出題語がありません。新しいラウンドを始めてください")]
  NoRound,

  /// ゲーム進行上のエラー
  #[error(transparent)]
  Game(#[from] GameError),
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ClientError>;
