//! Catalog sources
//!
//! The pipeline loads the catalog once per request through [`CatalogSource`]
//! and never writes to it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use super::{parse_catalog, CatalogItem};

/// Something that can produce a catalog snapshot
///
/// Loading never fails: a source that cannot produce items logs the
/// problem and returns an empty catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load a fresh snapshot, in catalog order
    async fn load(&self) -> Vec<CatalogItem>;
}

/// Catalog read from a JSON file on every load
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Vec<CatalogItem> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => parse_catalog(&bytes),
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to read catalog");
                Vec::new()
            }
        }
    }
}

/// Fixed in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Arc<Vec<CatalogItem>>,
}

impl StaticCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Vec<CatalogItem> {
        self.items.as_ref().clone()
    }
}
