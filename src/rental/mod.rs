//! Rental pricing module.
//!
//! Converts a weekly base price into a price for a chosen rental length
//! using the fixed duration tiers.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    find_tier, format_money, is_priceable, max_multiplier, multiplier_for, rental_price,
    round_money, DurationTier, DEFAULT_DURATION_DAYS, DURATION_TIERS,
};
pub use responses::MoneyResponse;
