//! Equipment packages and storefront content

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bundle of catalog items rented together at one weekly price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Included items, in display order
    pub item_ids: Vec<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub rental_price: Decimal,
}

/// Customer testimonial shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub location: String,
    pub quote: String,
}
