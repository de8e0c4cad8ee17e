//! # food-api
//!
//! Food catalog service. `GET /api/foods` runs the listing pipeline
//! (parse, filter, sort, paginate, assemble) over a catalog snapshot read
//! fresh for every request; the remaining endpoints are plain lookups over
//! the same snapshot.

pub mod catalog;
pub mod collation;
pub mod handlers;
pub mod pipeline;
pub mod query;
pub mod state;

pub use state::{FoodConfig, FoodState};

use axum::{routing::get, Router};
use lab_service::{
    config::Config,
    fallback::{not_found, with_fallback},
    health::health,
};

/// Service name used for configuration lookup and logs
pub const SERVICE_NAME: &str = "food-api";

/// Default configuration before files and environment are applied
pub fn default_config() -> Config<FoodConfig> {
    Config::named(SERVICE_NAME).with_port(3000)
}

/// Build the service router
///
/// Unknown paths are served from `middleware.static_dir` when configured,
/// otherwise answered with the JSON 404.
pub fn router(state: FoodState) -> Router {
    let static_dir = state.app().config().middleware.static_dir.clone();

    let routes = Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(health::<FoodConfig>))
        .route("/api/docs", get(handlers::docs))
        .route("/api/stats", get(handlers::stats))
        .route("/api/foods", get(handlers::list_foods))
        .route("/api/foods/random", get(handlers::random_food))
        .route("/api/foods/category/{category}", get(handlers::foods_by_category))
        .route("/api/foods/{id}", get(handlers::get_food))
        .with_state(state);

    with_fallback(routes, static_dir.as_deref(), not_found)
}
