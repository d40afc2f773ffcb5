//! Async HTTP client for the write half of the venue JSON API.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Async HTTP client for the venue JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url: base_url.into() })
  }

  pub fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  /// `POST /add/venue` with an unmodified fixture payload.
  pub async fn add_venue(&self, payload: &Value) -> Result<(StatusCode, Value)> {
    self.post("/add/venue", payload).await
  }

  /// `POST /add/rating` with an unmodified fixture payload.
  pub async fn add_rating(&self, payload: &Value) -> Result<(StatusCode, Value)> {
    self.post("/add/rating", payload).await
  }

  /// Send `body` and return the status with the decoded response body.
  /// Non-JSON bodies come back as a JSON string.
  async fn post(&self, path: &str, body: &Value) -> Result<(StatusCode, Value)> {
    let resp = self
      .client
      .post(self.url(path))
      .json(body)
      .send()
      .await
      .with_context(|| format!("POST {path} failed"))?;

    let status = resp.status();
    let text = resp
      .text()
      .await
      .with_context(|| format!("reading POST {path} response"))?;
    let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
    Ok((status, value))
  }
}
