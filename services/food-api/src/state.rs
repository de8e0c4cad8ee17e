//! Food service configuration and shared state

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;
use lab_service::{config::Config, state::AppState};
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSource, JsonFileCatalog};
use crate::collation::{BaseLetterCollator, Collator};

/// `[custom]` section of the food service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodConfig {
    /// Catalog file, read on every request
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/foods.json")
}

/// State shared by the food handlers
#[derive(Clone)]
pub struct FoodState {
    app: AppState<FoodConfig>,
    catalog: Arc<dyn CatalogSource>,
    collator: Arc<dyn Collator>,
}

impl FoodState {
    /// State reading the catalog file named in the configuration
    pub fn new(config: Config<FoodConfig>) -> Self {
        let catalog = JsonFileCatalog::new(config.custom.data_file.clone());
        Self::with_catalog(config, catalog)
    }

    /// State over an arbitrary catalog source
    pub fn with_catalog(config: Config<FoodConfig>, catalog: impl CatalogSource + 'static) -> Self {
        Self {
            app: AppState::new(config).with_version(env!("CARGO_PKG_VERSION")),
            catalog: Arc::new(catalog),
            collator: Arc::new(BaseLetterCollator),
        }
    }

    /// Replace the name collation
    #[must_use]
    pub fn with_collator(mut self, collator: impl Collator + 'static) -> Self {
        self.collator = Arc::new(collator);
        self
    }

    pub fn app(&self) -> &AppState<FoodConfig> {
        &self.app
    }

    pub fn catalog(&self) -> &dyn CatalogSource {
        self.catalog.as_ref()
    }

    pub fn collator(&self) -> &dyn Collator {
        self.collator.as_ref()
    }
}

impl FromRef<FoodState> for AppState<FoodConfig> {
    fn from_ref(state: &FoodState) -> Self {
        state.app.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogItem, StaticCatalog};

    #[test]
    fn test_default_data_file() {
        assert_eq!(FoodConfig::default().data_file, PathBuf::from("data/foods.json"));
    }

    #[tokio::test]
    async fn test_state_uses_given_catalog() {
        let state = FoodState::with_catalog(
            Config::named("food-api"),
            StaticCatalog::new(vec![CatalogItem::new(1)]),
        );
        assert_eq!(state.catalog().load().await.len(), 1);
        assert_eq!(state.app().config().service.name, "food-api");
    }
}
