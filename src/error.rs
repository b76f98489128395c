//! Error types for the server and its configuration.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Request-level failures. The endpoint tolerates any JSON shape, so the
/// only thing that can go wrong is a body that is not JSON at all.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejecting request: {}", self);
        error_response(self.status(), &self.to_string())
    }
}

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown reply variant '{0}' (expected 'greeting' or 'function-call')")]
    UnknownVariant(String),
    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Build a JSON error response with the given HTTP status and message.
pub fn error_response(status: StatusCode, msg: &str) -> Response {
    let body = serde_json::json!({ "error": { "message": msg } });
    (status, axum::Json(body)).into_response()
}
