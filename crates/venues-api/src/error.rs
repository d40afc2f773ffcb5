//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Convert any backend error via the shared core taxonomy.
  pub fn from_store<E: Into<venues_core::Error>>(e: E) -> Self {
    Self::from(e.into())
  }
}

impl From<venues_core::Error> for ApiError {
  fn from(e: venues_core::Error) -> Self {
    use venues_core::Error as Core;
    match e {
      Core::Validation(_) => ApiError::BadRequest(e.to_string()),
      Core::VenueNotFound(_) => ApiError::NotFound(e.to_string()),
      Core::AddressConflict { .. } => ApiError::Conflict(e.to_string()),
      Core::Storage(inner) => ApiError::Store(inner),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl From<PathRejection> for ApiError {
  fn from(r: PathRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    } else {
      tracing::warn!(error = %self, "request rejected");
    }
    let message = match &self {
      ApiError::NotFound(m) | ApiError::BadRequest(m) | ApiError::Conflict(m) => {
        m.clone()
      }
      ApiError::Store(_) => "internal error".to_owned(),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
