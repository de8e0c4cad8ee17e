//! # students-api
//!
//! Read-only student directory over a fixed in-memory roster.

pub mod error;
pub mod handlers;
pub mod roster;

use axum::{routing::get, Router};
use lab_service::{config::Config, fallback::with_fallback, health::health, state::AppState};

/// Service name used for configuration lookup and logs
pub const SERVICE_NAME: &str = "students-api";

/// Default configuration: port 3001
pub fn default_config() -> Config {
    Config::named(SERVICE_NAME).with_port(3001)
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    let static_dir = state.config().middleware.static_dir.clone();

    let routes = Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(health::<()>))
        .route("/students", get(handlers::list_students))
        .route("/students/{id}", get(handlers::get_student))
        .route("/students/major/{major}", get(handlers::students_by_major))
        .route("/stats", get(handlers::stats))
        .method_not_allowed_fallback(error::route_not_found)
        .with_state(state);

    with_fallback(routes, static_dir.as_deref(), error::route_not_found)
}
