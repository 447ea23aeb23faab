//! Response Model Definition

use serde::Serialize;

/// Body of `GET /`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
  /// Always "ok" while the server is up
  pub status: &'static str,
  /// Service name
  pub service: &'static str,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_response_serialization() {
    let response = StatusResponse {
      status: "ok",
      service: "akusento-api",
    };
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"status":"ok","service":"akusento-api"}"#);
  }
}
