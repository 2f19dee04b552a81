//! Catalog data source.
//!
//! The catalog is loaded either from the fixture compiled into the binary or
//! from a JSON file, then validated before anything downstream sees it.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{EquipmentItem, Package, Testimonial};
use crate::rental::is_priceable;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Full read-only catalog snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<EquipmentItem>,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    /// Item id -> dates on which the item cannot be rented
    #[serde(default)]
    pub blackouts: BTreeMap<String, Vec<NaiveDate>>,
    /// Snapshot number assigned by the cache; 0 until installed
    #[serde(skip)]
    pub generation: u64,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn item(&self, id: &str) -> Option<&EquipmentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|package| package.id == id)
    }

    /// Items included in a package, in the package's order
    pub fn package_items(&self, package: &Package) -> Vec<EquipmentItem> {
        package
            .item_ids
            .iter()
            .filter_map(|id| self.item(id).cloned())
            .collect()
    }

    pub fn blackouts_for(&self, item_id: &str) -> &[NaiveDate] {
        self.blackouts
            .get(item_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Reject data the pricing and filtering code must never see
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                errors.push(format!("duplicate item id '{}'", item.id));
            }
            if item.rental_price < Decimal::ZERO {
                errors.push(format!("item '{}' has a negative rental price", item.id));
            } else if !is_priceable(item.rental_price) {
                errors.push(format!("item '{}' rental price is too large", item.id));
            }
            if item.purchase_price < Decimal::ZERO {
                errors.push(format!("item '{}' has a negative purchase price", item.id));
            }
            if !(0.0..=5.0).contains(&item.rating) {
                errors.push(format!("item '{}' rating out of range", item.id));
            }
            for review in &item.reviews {
                if !(1..=5).contains(&review.rating) {
                    errors.push(format!(
                        "item '{}' has a review by {} rated {}",
                        item.id, review.author, review.rating
                    ));
                }
            }
        }

        for package in &self.packages {
            if package.rental_price < Decimal::ZERO {
                errors.push(format!("package '{}' has a negative rental price", package.id));
            } else if !is_priceable(package.rental_price) {
                errors.push(format!("package '{}' rental price is too large", package.id));
            }
            for id in &package.item_ids {
                if !seen.contains(id.as_str()) {
                    errors.push(format!("package '{}' references unknown item '{}'", package.id, id));
                }
            }
        }

        for id in self.blackouts.keys() {
            if !seen.contains(id.as_str()) {
                errors.push(format!("blackout listed for unknown item '{}'", id));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid(errors))
        }
    }
}

/// Where the catalog comes from
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Fixture compiled into the binary
    Embedded,
    /// JSON file on disk, re-read on every load
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Embedded,
        }
    }

    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = match self {
            CatalogSource::Embedded => {
                debug!("Loading embedded catalog");
                Catalog::from_json(EMBEDDED_CATALOG)?
            }
            CatalogSource::File(path) => {
                debug!("Loading catalog from {}", path.display());
                let json = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Catalog::from_json(&json)?
            }
        };

        info!(
            "Catalog loaded: {} items, {} packages",
            catalog.items.len(),
            catalog.packages.len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embedded_catalog_is_valid() {
        let catalog = CatalogSource::Embedded.load().await.unwrap();
        assert!(!catalog.items.is_empty());
        assert!(!catalog.packages.is_empty());
        assert!(!catalog.testimonials.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/catalog.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{"items": [{
            "id": "fin-1", "name": "Jet Fin", "brand": "Scubapro", "category": "fins",
            "rentalPrice": "-5.00", "purchasePrice": "150.00", "stock": 2,
            "isAvailable": true, "isRentable": true
        }]}"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("negative rental price"));
    }

    #[test]
    fn test_overflowing_price_rejected() {
        let json = r#"{
            "items": [{
                "id": "reg-9", "name": "MK25", "brand": "Scubapro", "category": "regulators",
                "rentalPrice": "79228162514264337593543950335", "purchasePrice": "900.00",
                "stock": 1, "isAvailable": true, "isRentable": true
            }],
            "packages": [
                {"id": "p9", "name": "Reg pack", "description": "", "itemIds": ["reg-9"],
                 "rentalPrice": "79228162514264337593543950335"}
            ]
        }"#;

        match Catalog::from_json(json) {
            Err(CatalogError::Invalid(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("item 'reg-9' rental price is too large"));
                assert!(errors[1].contains("package 'p9' rental price is too large"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let json = json.replace("79228162514264337593543950335", "1000000000000000000000000000");
        assert!(Catalog::from_json(&json).is_ok());
    }

    #[test]
    fn test_duplicate_ids_and_dangling_package_rejected() {
        let json = r#"{
            "items": [
                {"id": "t1", "name": "AL80", "brand": "Luxfer", "category": "tanks",
                 "rentalPrice": "40", "purchasePrice": "200", "stock": 1,
                 "isAvailable": true, "isRentable": true},
                {"id": "t1", "name": "AL80", "brand": "Luxfer", "category": "tanks",
                 "rentalPrice": "40", "purchasePrice": "200", "stock": 1,
                 "isAvailable": true, "isRentable": true}
            ],
            "packages": [
                {"id": "p1", "name": "Tank pack", "description": "", "itemIds": ["t1", "t9"],
                 "rentalPrice": "70"}
            ]
        }"#;

        match Catalog::from_json(json) {
            Err(CatalogError::Invalid(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("duplicate item id"));
                assert!(errors[1].contains("unknown item 't9'"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Catalog::from_json("{\"items\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
