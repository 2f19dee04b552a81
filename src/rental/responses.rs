//! Response DTOs for rental API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::CategoryCount;
use crate::models::EquipmentItem;

use super::calculators::{format_money, DurationTier};

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    /// Two-decimal display form, e.g. `USD 216.00`
    pub display: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
            display: format_money(amount, currency),
        }
    }
}

/// Response for a rental quote
#[derive(Debug, Clone, Serialize)]
pub struct RentalQuoteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    pub days: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
    /// False when no tier exists for `days` and the 1.0 fallback applied
    pub tier_matched: bool,
    pub base_weekly_price: MoneyResponse,
    pub total: MoneyResponse,
}

/// Response listing the duration tiers
#[derive(Debug, Serialize)]
pub struct DurationTiersResponse {
    pub tiers: Vec<DurationTier>,
    pub default_days: i32,
}

/// Response for a filtered equipment listing
#[derive(Debug, Serialize)]
pub struct EquipmentListResponse {
    pub category: String,
    pub count: usize,
    pub items: Vec<EquipmentItem>,
}

/// Response for category counts
#[derive(Debug, Serialize)]
pub struct CategoryCountsResponse {
    pub categories: Vec<CategoryCount>,
}

/// One package with its items resolved
#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rental_price: MoneyResponse,
    pub items: Vec<EquipmentItem>,
}

/// What the storefront should do when a visitor presses "Rent now"
#[derive(Debug, Serialize)]
pub struct RentalIntentResponse {
    pub status: &'static str,
    pub quote: RentalQuoteResponse,
}

/// Generic API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}
