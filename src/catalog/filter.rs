//! Category filtering over the equipment catalog.
//!
//! Pure functions, no I/O. Only rentable items are ever returned or counted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{Category, EquipmentItem, UnknownCategory};

/// Selected category on the equipment page. Defaults to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Options offered by the category selector, in display order
    pub const SELECTOR: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Masks),
        CategoryFilter::Only(Category::Fins),
        CategoryFilter::Only(Category::Wetsuits),
        CategoryFilter::Only(Category::Tanks),
        CategoryFilter::Only(Category::Bcds),
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Equipment",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether an item passes this filter. Non-rentable items never match.
    pub fn matches(&self, item: &EquipmentItem) -> bool {
        item.is_rentable
            && match self {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => item.category == *category,
            }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") || s.trim().is_empty() {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Rentable items matching `filter`, in input order.
pub fn filter_rentable(items: &[EquipmentItem], filter: CategoryFilter) -> Vec<EquipmentItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Count of rentable items for a single filter
pub fn count_for(items: &[EquipmentItem], filter: CategoryFilter) -> usize {
    items.iter().filter(|item| filter.matches(item)).count()
}

/// Count for one selector option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: CategoryFilter,
    pub label: &'static str,
    pub count: usize,
}

/// Counts for every selector option, in selector order
pub fn category_counts(items: &[EquipmentItem]) -> Vec<CategoryCount> {
    CategoryFilter::SELECTOR
        .into_iter()
        .map(|filter| CategoryCount {
            category: filter,
            label: filter.label(),
            count: count_for(items, filter),
        })
        .collect()
}
