//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{get_root, get_target_word, health_check, post_analyze};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// ブラウザのクライアントが別オリジンから呼べるよう CORS は全許可。
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(get_root))
    .route("/health", get(health_check))
    .route("/api/target-word", get(get_target_word))
    .route("/api/analyze", post(post_analyze))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}
