//! Tracing initialisation and per-request access logging

use axum::{body::Body, http::Request};
use tracing::Span;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result, ids::request_id_from_headers};

/// Initialize JSON structured logging filtered by `service.log_level`
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_tracing<T>(config: &Config<T>) -> Result<()> {
    let log_level = config.service.log_level.clone();

    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Tracing initialized for service: {}", config.service.name);
    }

    Ok(())
}

/// Span for one HTTP request, tagged with its method, path and request id
///
/// Used as the `make_span_with` hook of the server's `TraceLayer`, which
/// then logs status and latency when the response is produced.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request_id_from_headers(request.headers()).unwrap_or("-");
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
