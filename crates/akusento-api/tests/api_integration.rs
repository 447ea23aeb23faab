//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! スタブサービスを使用するため、辞書ロード不要で軽量かつ高速なテスト。

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use akusento::WordAnalysis;
use akusento_api::{
  api::{AppState, create_router},
  config::{Config, MAX_TEXT_LENGTH},
  errors::{ApiError, Result as ApiResult},
  service::AccentApiService,
};

/// 統合テスト用の軽量スタブサービス
///
/// - 空文字列: `invalid_input` エラー
/// - 長さ超過: `text_too_long` エラー
/// - "xyz": 解析不能として `invalid_input` エラー
/// - それ以外: モーラ数ぶんの固定パターン
/// - 出題語: 箸（2モーラ）だけを候補とする
struct StubAccentApiService;

fn hashi() -> WordAnalysis {
  WordAnalysis::new("箸", "ハシ", vec![2, 1])
}

impl AccentApiService for StubAccentApiService {
  fn analyze(&self, text: &str) -> ApiResult<WordAnalysis> {
    let text_bytes = text.len();

    if text.trim().is_empty() {
      return Err(ApiError::invalid_input("テキストが空です"));
    }

    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    if text == "xyz" {
      return Err(ApiError::invalid_input("読みを決定できませんでした"));
    }

    Ok(WordAnalysis::new(text, "ハシ", vec![1, 2]))
  }

  fn target_word(&self, min_mora: usize, max_mora: usize) -> ApiResult<WordAnalysis> {
    if min_mora > max_mora {
      return Err(ApiError::invalid_input("モーラ数の範囲が不正です"));
    }
    if (min_mora..=max_mora).contains(&2) {
      Ok(hashi())
    } else {
      Err(ApiError::not_found("指定範囲に出題候補がありません"))
    }
  }
}

/// テスト用の Router を構築する
fn test_app() -> Router {
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
    ..Config::default()
  };

  let service: Arc<dyn AccentApiService> = Arc::new(StubAccentApiService);
  create_router(AppState::new(config, service))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
  let response = test_app()
    .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  (status, body.to_vec())
}

async fn post_analyze(body: Body) -> (StatusCode, Vec<u8>) {
  let response = test_app()
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(body)
        .unwrap(),
    )
    .await
    .expect("request should succeed");

  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  (status, body.to_vec())
}

fn json(bytes: &[u8]) -> serde_json::Value {
  serde_json::from_slice(bytes).expect("body should be valid json")
}

// ============================================================================
// 正常系テスト
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let (status, body) = get("/health").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_slice(), b"OK");
}

#[tokio::test]
async fn root_returns_service_status() {
  let (status, body) = get("/").await;
  assert_eq!(status, StatusCode::OK);

  let json = json(&body);
  assert_eq!(json["status"], "ok");
  assert_eq!(json["service"], "akusento-api");
}

#[tokio::test]
async fn target_word_with_defaults_returns_200() {
  let (status, body) = get("/api/target-word").await;
  assert_eq!(status, StatusCode::OK);

  let json = json(&body);
  assert_eq!(json["text"], "箸");
  assert_eq!(json["reading"], "ハシ");
  assert_eq!(json["accent_pattern"], serde_json::json!([2, 1]));
  assert_eq!(json["accent_code"], "ハ]シ");
}

#[tokio::test]
async fn target_word_with_range_returns_200() {
  let (status, _) = get("/api/target-word?min_mora=2&max_mora=2").await;
  assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn post_analyze_success_returns_200() {
  let payload = serde_json::json!({ "text": "橋" });
  let (status, body) = post_analyze(Body::from(payload.to_string())).await;
  assert_eq!(status, StatusCode::OK);

  let json = json(&body);
  assert_eq!(json["text"], "橋");
  assert_eq!(json["accent_pattern"], serde_json::json!([1, 2]));
  assert_eq!(json["accent_code"], "ハ[シ");
}

// ============================================================================
// 異常系テスト（サービスエラー）
// ============================================================================

#[tokio::test]
async fn target_word_inverted_range_returns_400() {
  let (status, body) = get("/api/target-word?min_mora=5&max_mora=2").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn target_word_empty_range_returns_404() {
  let (status, body) = get("/api/target-word?min_mora=8&max_mora=9").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(json(&body)["error"]["code"], "not_found");
}

#[tokio::test]
async fn target_word_empty_query_values_use_defaults() {
  let (status, body) = get("/api/target-word?min_mora=&max_mora=").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json(&body)["text"], "箸");
}

#[tokio::test]
async fn target_word_non_numeric_query_returns_400_json() {
  let (status, body) = get("/api/target-word?min_mora=two").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn post_analyze_empty_text_returns_400() {
  let payload = serde_json::json!({ "text": "" });
  let (status, body) = post_analyze(Body::from(payload.to_string())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn post_analyze_too_long_text_returns_400() {
  // 上限は Axum のボディサイズ制限より小さいため、サービス層のエラーになる
  let long_text = "a".repeat(MAX_TEXT_LENGTH + 1);
  let payload = serde_json::json!({ "text": long_text });
  let (status, body) = post_analyze(Body::from(payload.to_string())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "text_too_long");
}

#[tokio::test]
async fn post_analyze_unanalyzable_text_returns_400() {
  let payload = serde_json::json!({ "text": "xyz" });
  let (status, body) = post_analyze(Body::from(payload.to_string())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(json(&body)["error"]["message"].as_str().is_some());
}

// ============================================================================
// JSON パースエラーテスト（Axum 側）
// ============================================================================

#[tokio::test]
async fn post_analyze_invalid_json_returns_400_json() {
  let (status, body) = post_analyze(Body::from("{ invalid json")).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn post_analyze_missing_text_field_returns_400_json() {
  let payload = serde_json::json!({ "foo": 1 });
  let (status, body) = post_analyze(Body::from(payload.to_string())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
  assert!(json(&body)["error"]["message"].as_str().is_some());
}

#[tokio::test]
async fn post_analyze_without_content_type_returns_400_json() {
  let response = test_app()
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .body(Body::from(r#"{"text":"橋"}"#))
        .unwrap(),
    )
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}
