//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 3004,
///     "message": "backup directory unavailable: /backup: No such file or directory"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                         |
/// |-----------|------------|-------------------------------------|
/// | 3000–3999 | Server     | 500 Internal / 503 Unavailable      |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Storage could not be created or opened.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Writing a record to storage failed.
    #[error("storage write failed: {0}")]
    StorageWrite(String),

    /// Reading from storage failed.
    #[error("storage read failed: {0}")]
    StorageRead(String),

    /// The backup directory could not be listed.
    #[error("backup directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Internal(_) => 3000,
            Self::StorageUnavailable(_) => 3001,
            Self::StorageWrite(_) => 3002,
            Self::StorageRead(_) => 3003,
            Self::DirectoryUnavailable(_) => 3004,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::StorageUnavailable(_) | Self::DirectoryUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::StorageWrite(_) | Self::StorageRead(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(code = self.error_code(), error = %self, "request failed");
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
