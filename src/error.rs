// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("User \"{0}\" not found")]
    UserNotFound(String),

    /// Upstream answered with something that is not JSON (typically an HTML
    /// challenge page). Carries the upstream status and a truncated excerpt.
    #[error("LeetCode API error: received non-JSON response (status {status})")]
    UpstreamMalformed { status: u16, excerpt: String },

    /// Upstream returned only GraphQL errors, no data at all.
    #[error("LeetCode API error: {0}")]
    UpstreamGraphQl(String),

    #[error("Unexpected response from LeetCode API")]
    UpstreamUnexpectedShape,

    /// The outbound request itself failed (network/DNS/TLS).
    #[error("LeetCode request failed: {0}")]
    UpstreamTransport(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for the "try again later" class of upstream failures, as opposed
    /// to caller mistakes (bad input, unknown user).
    pub fn is_upstream_transient(&self) -> bool {
        matches!(
            self,
            AppError::UpstreamMalformed { .. }
                | AppError::UpstreamGraphQl(_)
                | AppError::UpstreamUnexpectedShape
                | AppError::UpstreamTransport(_)
        )
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::UserNotFound(_) => (StatusCode::NOT_FOUND, self.to_string(), None),
            AppError::UpstreamMalformed { excerpt, .. } => (
                StatusCode::BAD_GATEWAY,
                self.to_string(),
                Some(excerpt.clone()),
            ),
            AppError::UpstreamGraphQl(_) => (StatusCode::BAD_GATEWAY, self.to_string(), None),
            AppError::UpstreamUnexpectedShape => {
                (StatusCode::BAD_GATEWAY, self.to_string(), None)
            }
            AppError::UpstreamTransport(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
                Some(msg.clone()),
            ),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse { error, details };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
