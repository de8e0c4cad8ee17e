//! Error envelope for the student directory
//!
//! This service answers failures with a bare `{ "error": "..." }` body
//! instead of the shared `success/message` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudentError {
    #[error("Query \"year\" must be an integer")]
    InvalidYear,

    #[error("Invalid student id")]
    InvalidId,

    #[error("Student not found")]
    StudentNotFound,

    #[error("Not Found")]
    RouteNotFound,
}

impl StudentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidYear | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::StudentNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request rejected");
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Fallback for unmatched routes and methods
pub async fn route_not_found() -> StudentError {
    StudentError::RouteNotFound
}
