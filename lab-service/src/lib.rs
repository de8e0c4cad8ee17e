//! # lab-service
//!
//! Shared axum runtime for the lab REST APIs (food catalog, contact form,
//! student directory).
//!
//! ## Features
//!
//! - **Layered configuration**: defaults, TOML files and `LAB_` environment
//!   variables through figment
//! - **Middleware stack**: request ids, panic recovery, body size limits,
//!   timeouts, compression and CORS
//! - **Per-client rate limiting**: governor keyed by client IP
//! - **Observability**: JSON tracing with request ids on every span
//! - **Graceful shutdown**: SIGTERM and SIGINT handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use lab_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config: Config = Config::load_for_service("hello-api")?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone());
//!     let app = Router::new()
//!         .route("/health", get(health::<()>))
//!         .with_state(state);
//!
//!     Server::new(config).serve(with_fallback(app, None, not_found)).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod fallback;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod observability;
pub mod params;
pub mod server;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MiddlewareConfig, RateLimitConfig, ServiceConfig};
    pub use crate::error::{Error, ErrorResponse, Result};
    pub use crate::fallback::{not_found, with_fallback};
    pub use crate::health::{health, HealthResponse};
    pub use crate::ids::{MakeTypedRequestId, RequestId};
    pub use crate::middleware::{
        client_ip, rate_limit_middleware, request_id_layer, request_id_propagation_layer,
        sensitive_headers_layer, ClientRateLimit, SENSITIVE_HEADERS,
    };
    pub use crate::observability::init_tracing;
    pub use crate::params::{leading_int, positive_int, ZeroAs};
    pub use crate::server::Server;
    pub use crate::state::AppState;

    pub use axum::{
        extract::{FromRef, Path, Query, State},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Json, Response},
        routing::{get, post},
        Router,
    };

    pub use serde::{Deserialize, Serialize};

    // Re-export tracing macros
    pub use tracing::{debug, error, info, instrument, warn};

    pub use tokio;

    pub use async_trait::async_trait;

    pub use anyhow::{self, Context as AnyhowContext};

    pub use chrono::{DateTime, Utc};
}
