//! Happy Diving storefront: equipment browsing and rental price previews.

pub mod availability;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod rental;
pub mod rotation;
pub mod routes;
pub mod session;

use std::sync::Arc;

use cache::AppCache;
use catalog::{Catalog, CatalogError, CatalogSource};
use config::Config;
use rotation::Rotator;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
    pub source: CatalogSource,
    pub config: Arc<Config>,
    pub rotator: Arc<Rotator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            cache: AppCache::new(),
            source: CatalogSource::from_path(config.catalog_path.clone()),
            config: Arc::new(config),
            rotator: Arc::new(Rotator::new()),
        }
    }

    /// Current catalog snapshot
    pub async fn catalog(&self) -> Result<Arc<Catalog>, CatalogError> {
        self.cache.catalog(&self.source).await
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}
