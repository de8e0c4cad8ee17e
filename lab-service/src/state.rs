//! Application state shared across handlers

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;

/// Application state shared across handlers
///
/// Generic parameter `T` matches the custom config type in `Config<T>`.
/// Services with resources of their own wrap this in a larger state struct
/// and implement `axum::extract::FromRef` so shared handlers such as
/// [`crate::health::health`] keep working.
pub struct AppState<T = ()> {
    config: Arc<Config<T>>,
    started_at: Instant,
    version: &'static str,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            started_at: self.started_at,
            version: self.version,
        }
    }
}

impl<T> AppState<T> {
    /// Create a new AppState with the given configuration
    pub fn new(config: Config<T>) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Report a service-specific version instead of the runtime's own
    #[must_use]
    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &Config<T> {
        &self.config
    }

    /// Service version reported by health and status endpoints
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Time since the state was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_shares_config_between_clones() {
        let state = AppState::new(Config::<()>::named("students-api")).with_version("9.9.9");
        let cloned = state.clone();
        assert_eq!(cloned.config().service.name, "students-api");
        assert_eq!(cloned.version(), "9.9.9");
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }
}
