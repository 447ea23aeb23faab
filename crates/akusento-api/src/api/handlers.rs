//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
};
use tracing::{debug, error, info};

use crate::config::SERVICE_NAME;
use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, StatusResponse, TargetWordQuery, WordAnalysis};

use super::state::AppState;

/// GET / エンドポイント
///
/// サービス名と稼働状態を返す。
pub async fn get_root() -> Json<StatusResponse> {
  Json(StatusResponse {
    status: "ok",
    service: SERVICE_NAME,
  })
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}

/// GET /api/target-word エンドポイント
///
/// モーラ数の範囲内から出題語をランダムに 1 つ返す。
///
/// # Query
/// - `min_mora`（省略時 2）
/// - `max_mora`（省略時 10）
///
/// # Response
/// - 200 OK: 出題語
/// - 400 Bad Request: `min_mora > max_mora`、数値でないクエリ
/// - 404 Not Found: 範囲内に候補がない
pub async fn get_target_word(
  State(state): State<AppState>,
  query: Result<Query<TargetWordQuery>, QueryRejection>,
) -> Result<Json<WordAnalysis>, ApiError> {
  let Query(query) = query?;
  let (min_mora, max_mora) = query.mora_range();
  debug!(min_mora, max_mora, "出題語リクエストを受信");

  let service = state.service.clone();
  let word = tokio::task::spawn_blocking(move || service.target_word(min_mora, max_mora))
    .await
    .map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(text = %word.text, morae = word.mora_count(), "出題語を返却");

  Ok(Json(word))
}

/// POST /api/analyze エンドポイント
///
/// テキストの読みとアクセントパターンを返す。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過、解析不能、不正なボディ）
/// - 500 Internal Server Error: 内部エラー
pub async fn post_analyze(
  State(state): State<AppState>,
  payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<WordAnalysis>, ApiError> {
  let Json(request) = payload?;
  debug!(text_len = request.text.len(), "アクセント解析リクエストを受信");

  // CPUバウンドな処理を spawn_blocking で実行
  let service = state.service.clone();

  let analysis = tokio::task::spawn_blocking(move || service.analyze(&request.text))
    .await
    .map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    text = %analysis.text,
    accent_code = %analysis.accent_code,
    "アクセント解析完了"
  );

  Ok(Json(analysis))
}
