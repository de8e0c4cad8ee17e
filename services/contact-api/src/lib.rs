//! # contact-api
//!
//! Contact form and feedback intake. Submissions are validated, sanitized
//! and appended to JSON files under the configured data directory. The
//! whole `/api` tree is rate limited per client.

pub mod handlers;
pub mod state;
pub mod store;
pub mod validation;

pub use state::{ContactConfig, ContactState};

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use lab_service::{
    config::{Config, RateLimitConfig},
    fallback::{not_found, with_fallback},
    health::health,
    middleware::{rate_limit_middleware, ClientRateLimit},
};

/// Service name used for configuration lookup and logs
pub const SERVICE_NAME: &str = "contact-api";

/// Default configuration: port 3000, 10 requests per 15 minutes per client
pub fn default_config() -> Config<ContactConfig> {
    Config::named(SERVICE_NAME)
        .with_port(3000)
        .with_rate_limit(RateLimitConfig::default())
}

/// Build the service router
pub fn router(state: ContactState) -> Router {
    let config = state.app().config();
    let static_dir = config.middleware.static_dir.clone();

    let api = Router::new()
        .route("/contact", post(handlers::submit_contact).get(handlers::list_contacts))
        .route("/feedback", post(handlers::submit_feedback))
        .route("/feedback/stats", get(handlers::feedback_stats))
        .route("/status", get(handlers::status))
        .route("/docs", get(handlers::docs));

    let api = match &config.rate_limit {
        Some(limit) => {
            api.layer(from_fn_with_state(ClientRateLimit::new(limit.clone()), rate_limit_middleware))
        }
        None => api,
    };

    let routes = Router::new()
        .route("/health", get(health::<ContactConfig>))
        .nest("/api", api)
        .with_state(state);

    with_fallback(routes, static_dir.as_deref(), not_found)
}
