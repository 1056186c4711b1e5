//! Error-to-response mapping for the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors surfaced to HTTP callers.
///
/// Bad input becomes a 400; any upstream failure becomes a 502 so callers
/// can distinguish "you asked wrong" from "the provider is unhappy".
#[derive(Debug)]
pub enum AppError {
    /// The request is missing or malformed a required parameter.
    BadRequest(String),
    /// The upstream API call failed.
    Upstream(marketstack_api::Error),
}

impl From<marketstack_api::Error> for AppError {
    fn from(e: marketstack_api::Error) -> Self {
        Self::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": msg })),
            )
                .into_response(),
            AppError::Upstream(marketstack_api::Error::HttpStatus { status, .. }) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "upstream request failed",
                    "upstream_status": status,
                })),
            )
                .into_response(),
            AppError::Upstream(marketstack_api::Error::RequestFailed) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "upstream request failed" })),
            )
                .into_response(),
        }
    }
}
