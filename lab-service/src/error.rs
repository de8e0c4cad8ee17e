//! Error types and HTTP response conversion
//!
//! Every error leaves the service as a JSON envelope of the form
//! `{ "success": false, "message": "...", "errors": [...] }`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Generic message returned for faults that must not leak details
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Field validation failed (400 with per-field reasons)
    #[error("{message}: {}", .errors.join(", "))]
    Validation {
        /// Summary message
        message: String,
        /// One entry per failed field, formatted `field: reason`
        errors: Vec<String>,
    },

    /// Client exceeded its request quota
    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until the client may retry
        retry_after_secs: u64,
    },

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a validation error with the conventional summary message
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation {
            message: "Validation failed".to_string(),
            errors,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Config(_) | Self::Io(_) | Self::Json(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Human-readable message
    pub message: String,

    /// Per-field validation failures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Create an error response carrying field errors
    pub fn with_errors(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Error::NotFound(msg) | Error::BadRequest(msg) => ErrorResponse::new(msg),

            Error::Validation { message, errors } => ErrorResponse::with_errors(message, errors),

            Error::RateLimited { retry_after_secs } => {
                tracing::warn!(retry_after_secs, "Rate limit exceeded");
                let mut response = (
                    status,
                    Json(ErrorResponse::new(
                        "Too many requests, please try again later",
                    )),
                )
                    .into_response();
                if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, value);
                }
                return response;
            }

            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }

            Error::Json(e) => {
                tracing::error!("JSON error: {}", e);
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }

            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(body)).into_response()
    }
}
