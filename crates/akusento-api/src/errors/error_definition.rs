//! APIエラー定義

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use akusento::errors::{AkusentoError, AnalyzerError, CandidateError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// テキストが長すぎる
  TextTooLong,
  /// 該当する出題候補がない
  NotFound,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::NotFound => "not_found",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効
  #[error("入力値が無効です: {0}")]
  InvalidInput(String),

  /// テキストが長すぎる
  #[error("テキストが長すぎます: {0} バイト（最大: {1} バイト）")]
  TextTooLong(usize, usize),

  /// 該当する出題候補がない
  #[error("見つかりません: {0}")]
  NotFound(String),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::NotFound(_) => ApiErrorKind::NotFound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// 候補なしエラーを作成
  #[must_use]
  pub fn not_found(message: impl Into<String>) -> Self {
    Self::NotFound(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// AkusentoError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<AkusentoError> for ApiError {
  fn from(err: AkusentoError) -> Self {
    match err {
      AkusentoError::Analyzer(AnalyzerError::InvalidInput { reason }) => {
        ApiError::invalid_input(reason)
      }
      AkusentoError::Analyzer(AnalyzerError::Unanalyzable { .. }) => {
        ApiError::invalid_input(err.to_string())
      }
      AkusentoError::Candidate(CandidateError::InvalidRange { .. }) => {
        ApiError::invalid_input(err.to_string())
      }
      AkusentoError::Candidate(CandidateError::NoCandidate { .. }) => {
        ApiError::not_found(err.to_string())
      }
      AkusentoError::Dictionary(_) | AkusentoError::Analyzer(AnalyzerError::Dictionary(_)) => {
        ApiError::config(format!("dictionary error: {err}"))
      }
      AkusentoError::Config(err) => ApiError::config(err.to_string()),
      AkusentoError::Candidate(_) | AkusentoError::Game(_) => {
        ApiError::internal(format!("internal error: {err}"))
      }
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// ボディの抽出失敗（不正な JSON、欠けたフィールド、Content-Type 不一致）
///
/// Axum の既定はプレーンテキストのため、他のエラーと同じ JSON 形式にそろえる。
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::invalid_input(rejection.body_text())
  }
}

/// クエリの抽出失敗（数値でないモーラ数など）
impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    ApiError::invalid_input(rejection.body_text())
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
