//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Seconds since the state was created
    pub uptime_secs: u64,
}

/// Liveness check
///
/// Always 200 while the process is serving requests. Services mount it as
/// `GET /health`; it extracts [`AppState`] through `FromRef`, so it works
/// with any service state that embeds one.
pub async fn health<T>(State(state): State<AppState<T>>) -> impl IntoResponse
where
    T: Send + Sync + 'static,
{
    let response = HealthResponse {
        status: "ok".to_string(),
        service: state.config().service.name.clone(),
        version: Some(state.version().to_string()),
        uptime_secs: state.uptime().as_secs(),
    };

    (StatusCode::OK, Json(response))
}
