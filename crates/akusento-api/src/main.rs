//! akusento-api サーバーエントリーポイント

use std::sync::Arc;

use akusento_api::ApiError;
use akusento_api::api::AppState;
use akusento_api::api::run_server;
use akusento_api::config::Config;
use akusento_api::init_tracing;
use akusento_api::service::AccentApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み
  let config = Config::from_env()?;

  // ロギングの初期化
  init_tracing(&config);
  tracing::info!(preset = ?config.preset, "設定を読み込みました");

  // サービスの初期化（辞書ロード + 出題候補の構築）
  let service = Arc::new(AccentApiServiceFull::new(&config)?);
  tracing::info!(
    candidates = service.inner().pool().len(),
    "アクセント解析サービスを初期化しました"
  );

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
