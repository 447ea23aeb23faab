//! HTTP client for akusento-api

use std::time::Duration;

use akusento::WordAnalysis;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::errors::{ClientError, Result};

/// Request timeout for every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct AnalyzeBody<'a> {
  text: &'a str,
}

/// Talks to `/api/target-word` and `/api/analyze`.
#[derive(Debug, Clone)]
pub struct AccentApiClient {
  http: Client,
  base_url: Url,
}

impl AccentApiClient {
  /// Creates a client for the server at `base_url` (e.g. `http://127.0.0.1:8000`).
  ///
  /// # Errors
  /// - `base_url` is not an absolute URL
  /// - the HTTP client cannot be built
  pub fn new(base_url: &str) -> Result<Self> {
    // join() replaces the last segment unless the path ends with '/'
    let mut base_url = Url::parse(base_url)?;
    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      base_url.set_path(&path);
    }

    let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(Self { http, base_url })
  }

  /// Base URL with a trailing slash
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// Fetches a random target word with `min_mora..=max_mora` morae.
  ///
  /// # Errors
  /// Transport failure or any non-2xx status
  pub async fn target_word(&self, min_mora: usize, max_mora: usize) -> Result<WordAnalysis> {
    let url = self.base_url.join("api/target-word")?;
    debug!(%url, min_mora, max_mora, "Fetching target word");

    let response = self
      .http
      .get(url)
      .query(&[("min_mora", min_mora), ("max_mora", max_mora)])
      .send()
      .await?;

    Ok(ensure_success(response)?.json().await?)
  }

  /// Analyzes the reading and accent of `text`.
  ///
  /// # Errors
  /// Transport failure or any non-2xx status
  pub async fn analyze(&self, text: &str) -> Result<WordAnalysis> {
    let url = self.base_url.join("api/analyze")?;
    debug!(%url, text, "Analyzing guess");

    let response = self.http.post(url).json(&AnalyzeBody { text }).send().await?;

    Ok(ensure_success(response)?.json().await?)
  }
}

/// Non-2xx responses are failures; the body is not interpreted.
fn ensure_success(response: Response) -> Result<Response> {
  let status = response.status();
  if status.is_success() {
    Ok(response)
  } else {
    warn!(status = status.as_u16(), url = %response.url(), "Request failed");
    Err(ClientError::Status {
      status: status.as_u16(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_url_gets_trailing_slash() {
    let client = AccentApiClient::new("http://127.0.0.1:8000/game").unwrap();
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8000/game/");
    assert_eq!(
      client.base_url().join("api/analyze").unwrap().as_str(),
      "http://127.0.0.1:8000/game/api/analyze"
    );
  }

  #[test]
  fn relative_base_url_is_rejected() {
    assert!(matches!(AccentApiClient::new("localhost"), Err(ClientError::Url(_))));
  }
}
