//! Contact service configuration and shared state

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;
use lab_service::{config::Config, state::AppState};
use serde::{Deserialize, Serialize};

use crate::store::JsonFileStore;

/// `[custom]` section of the contact service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Directory holding `contacts.json` and `feedback.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// State shared by the contact handlers
#[derive(Clone)]
pub struct ContactState {
    app: AppState<ContactConfig>,
    store: Arc<JsonFileStore>,
}

impl ContactState {
    pub fn new(config: Config<ContactConfig>) -> Self {
        let store = JsonFileStore::new(config.custom.data_dir.clone());
        Self {
            app: AppState::new(config).with_version(env!("CARGO_PKG_VERSION")),
            store: Arc::new(store),
        }
    }

    pub fn app(&self) -> &AppState<ContactConfig> {
        &self.app
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }
}

impl FromRef<ContactState> for AppState<ContactConfig> {
    fn from_ref(state: &ContactState) -> Self {
        state.app.clone()
    }
}
