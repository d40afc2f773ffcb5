//! Error type for the HTML pages and its axum `IntoResponse` implementation.
//!
//! JSON endpoints use [`venues_api::ApiError`]; pages answer with a small HTML
//! document instead.

use axum::{
  extract::rejection::PathRejection,
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pages::escape;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found: {0}")]
  NotFound(String),
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Convert any backend error via the shared core taxonomy.
  pub fn from_store<E: Into<venues_core::Error>>(e: E) -> Self {
    let err: venues_core::Error = e.into();
    match err {
      venues_core::Error::VenueNotFound(id) => {
        Error::NotFound(format!("venue {id} not found"))
      }
      venues_core::Error::Storage(inner) => Error::Store(inner),
      other => Error::BadRequest(other.to_string()),
    }
  }
}

impl From<PathRejection> for Error {
  fn from(r: PathRejection) -> Self { Error::BadRequest(r.body_text()) }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::BadRequest(_) => StatusCode::BAD_REQUEST,
      Error::Store(e) => {
        tracing::error!(error = %e, "page failed");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    let title = status.canonical_reason().unwrap_or("Error");
    let message = match &self {
      Error::Store(_) => "internal error".to_owned(),
      other => other.to_string(),
    };
    let body = format!(
      "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n<p>{}</p>\n<p><a href=\"/\">All venues</a></p>\n</body>\n</html>\n",
      escape(&message),
    );
    (status, Html(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn body_text(err: Error) -> (StatusCode, String) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }

  #[tokio::test]
  async fn store_error_page_hides_details() {
    let (status, html) =
      body_text(Error::Store("no such table: venues".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("<p>internal error</p>"));
    assert!(!html.contains("no such table"));
  }

  #[tokio::test]
  async fn not_found_page_keeps_message() {
    let (status, html) =
      body_text(Error::NotFound("venue 9 not found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("not found: venue 9 not found"));
  }
}
