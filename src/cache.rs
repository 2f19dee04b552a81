//! In-memory caching using moka
//!
//! Holds the current catalog snapshot and the filtered listings derived from
//! it. Every installed snapshot gets a new generation number and listings are
//! keyed by (generation, filter), so a listing computed from one snapshot is
//! never served for another.

use moka::future::Cache;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::catalog::{filter_rentable, Catalog, CatalogError, CatalogSource, CategoryFilter};
use crate::models::EquipmentItem;

const CATALOG_KEY: &str = "catalog";

/// Application cache holding the catalog snapshot and filtered listings
#[derive(Clone)]
pub struct AppCache {
    /// Catalog snapshot (singleton)
    pub catalog: Cache<String, Arc<Catalog>>,
    /// Rentable items per snapshot generation and selected filter
    pub listings: Cache<(u64, CategoryFilter), Arc<Vec<EquipmentItem>>>,
    generation: Arc<AtomicU64>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Catalog: 1 entry, replaced by the refresher rather than expired
            catalog: Cache::builder().max_capacity(1).build(),

            // Listings: one per category filter, 15 min TTL
            listings: Cache::builder()
                .max_capacity(32)
                .time_to_live(Duration::from_secs(15 * 60))
                .build(),

            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    fn install(&self, mut catalog: Catalog) -> Arc<Catalog> {
        catalog.generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        Arc::new(catalog)
    }

    /// Current catalog snapshot, loading it from `source` on a miss
    pub async fn catalog(&self, source: &CatalogSource) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(cached) = self.catalog.get(CATALOG_KEY).await {
            return Ok(cached);
        }

        debug!("Cache MISS for catalog");
        let catalog = self.install(source.load().await?);
        self.catalog
            .insert(CATALOG_KEY.to_string(), catalog.clone())
            .await;
        Ok(catalog)
    }

    /// Swap in a new snapshot and drop listings computed from older ones
    pub async fn replace_catalog(&self, catalog: Catalog) -> Arc<Catalog> {
        let catalog = self.install(catalog);
        self.catalog
            .insert(CATALOG_KEY.to_string(), catalog.clone())
            .await;
        self.listings.invalidate_all();
        catalog
    }

    /// Rentable items for `filter`, computed from `catalog` on a miss
    pub async fn listing(&self, catalog: &Catalog, filter: CategoryFilter) -> Arc<Vec<EquipmentItem>> {
        let key = (catalog.generation, filter);
        if let Some(cached) = self.listings.get(&key).await {
            debug!("Cache HIT for listing: {} (generation {})", filter, key.0);
            return cached;
        }

        debug!("Cache MISS for listing: {} (generation {})", filter, key.0);
        let items = Arc::new(filter_rentable(&catalog.items, filter));
        self.listings.insert(key, items.clone()).await;
        items
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            catalog_cached: self.catalog.entry_count() > 0,
            listings_size: self.listings.entry_count(),
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub catalog_cached: bool,
    pub listings_size: u64,
}

/// Start background catalog refresher
///
/// Reloads the catalog every `period`. The initial load happens before the
/// server starts, so the first reload waits a full period.
pub async fn start_catalog_refresher(cache: AppCache, source: CatalogSource, period: Duration) {
    let mut interval = interval(period);
    // First tick completes immediately
    interval.tick().await;
    loop {
        interval.tick().await;
        refresh_catalog(&cache, &source).await;
    }
}

/// Reload the catalog, keeping the previous snapshot if the load fails
pub async fn refresh_catalog(cache: &AppCache, source: &CatalogSource) {
    info!("Refreshing catalog...");

    match source.load().await {
        Ok(catalog) => {
            let installed = cache.replace_catalog(catalog).await;
            info!("Catalog refresh complete (generation {})", installed.generation);
        }
        Err(e) => warn!("Failed to refresh catalog, keeping previous snapshot: {}", e),
    }
}
