//! Equipment models

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Masks,
    Fins,
    Regulators,
    Bcds,
    Wetsuits,
    Tanks,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Masks,
        Category::Fins,
        Category::Regulators,
        Category::Bcds,
        Category::Wetsuits,
        Category::Tanks,
        Category::Accessories,
    ];

    /// Wire/query label, e.g. `"bcds"`
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Masks => "masks",
            Category::Fins => "fins",
            Category::Regulators => "regulators",
            Category::Bcds => "bcds",
            Category::Wetsuits => "wetsuits",
            Category::Tanks => "tanks",
            Category::Accessories => "accessories",
        }
    }

    /// Human-readable label for the storefront
    pub fn label(&self) -> &'static str {
        match self {
            Category::Masks => "Masks",
            Category::Fins => "Fins",
            Category::Regulators => "Regulators",
            Category::Bcds => "BCDs",
            Category::Wetsuits => "Wetsuits",
            Category::Tanks => "Tanks",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Customer review attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

/// Equipment record as supplied by the catalog source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    /// Base rental price for one week
    #[serde(with = "rust_decimal::serde::str")]
    pub rental_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub purchase_price: Decimal,
    pub stock: u32,
    pub is_available: bool,
    pub is_rentable: bool,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl EquipmentItem {
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the item can be handed out at all (stocked and flagged available)
    pub fn in_stock(&self) -> bool {
        self.is_available && self.stock > 0
    }
}
