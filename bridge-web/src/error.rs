use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bridge_core::StoreError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the web handlers
#[derive(Debug, Error)]
pub enum WebError {
  #[error("{0}")]
  Unauthorized(String),

  #[error("{0}")]
  BadRequest(String),

  #[error(transparent)]
  Store(#[from] StoreError),

  #[error("GitHub request failed: {0}")]
  GitHub(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WebError>;

impl IntoResponse for WebError {
  fn into_response(self) -> Response {
    let status = match &self {
      WebError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      // Store misses come from caller-supplied identifiers
      WebError::BadRequest(_) | WebError::Store(_) => StatusCode::BAD_REQUEST,
      WebError::GitHub(_) => StatusCode::BAD_GATEWAY,
    };

    (status, Json(json!({ "err": self.to_string() }))).into_response()
  }
}
