//! Request DTOs for rental API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::calculators::DEFAULT_DURATION_DAYS;

fn default_days() -> i32 {
    DEFAULT_DURATION_DAYS
}

fn default_calendar_days() -> u32 {
    14
}

/// `?days=` on quote endpoints
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    #[serde(default = "default_days")]
    pub days: i32,
}

/// Request to quote an arbitrary base price
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_weekly_price: Decimal,
    #[serde(default = "default_days")]
    pub days: i32,
}

/// Request to start a rental from the storefront call-to-action
#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    pub item_id: String,
    #[serde(default = "default_days")]
    pub days: i32,
}

/// `?from=&days=` on the availability endpoint
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default = "default_calendar_days")]
    pub days: u32,
}
