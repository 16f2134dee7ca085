//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and produces
//! a JSON response body `{"error": "message"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type that implements `IntoResponse`.
///
/// - `NotFound` → 404
/// - `BadRequest` → 400
/// - `Internal` → 500
#[derive(Debug)]
pub enum ApiError {
    /// Route or resource not found (404).
    NotFound(String),
    /// Invalid request body or parameters (400).
    BadRequest(String),
    /// Unexpected server error (500).
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
