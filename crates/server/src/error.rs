//! Error responses for the HTTP API.
//!
//! Every failure leaves the service as `{"error": <message>, "code": <CODE>}`
//! with a matching status. Request validation happens here, before any call
//! into the recommendation engine.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Standard API error response.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    /// Create a new internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Create a new bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new unprocessable entity error.
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Create an error with a specific status code.
    pub fn custom(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    /// Machine-readable code derived from the status.
    pub fn code(&self) -> &'static str {
        match self.status_code {
            StatusCode::BAD_REQUEST => "BAD_REQUEST",
            StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
            StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
            StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
            StatusCode::NOT_FOUND => "NOT_FOUND",
            s if s.is_server_error() => "INTERNAL_ERROR",
            _ => "REQUEST_ERROR",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(
            target: "learnavia::http",
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Rejected request body"
        );
        Self::custom(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            tracing::error!(target: "learnavia::http", error = %self.message, "Request failed");
        }
        let body = json!({
            "error": self.message,
            "code": self.code(),
        });
        (self.status_code, Json(body)).into_response()
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
