//! Core rental pricing functions.
//!
//! Pure functions for pricing math - no catalog or cache access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

/// A fixed (days, multiplier) pair applied to the weekly base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationTier {
    pub days: i32,
    /// Multiplier in hundredths, so 1.8 is stored as 180
    multiplier_hundredths: i64,
}

impl DurationTier {
    const fn new(days: i32, multiplier_hundredths: i64) -> Self {
        Self {
            days,
            multiplier_hundredths,
        }
    }

    pub fn multiplier(&self) -> Decimal {
        Decimal::new(self.multiplier_hundredths, 2).normalize()
    }

    pub fn label(&self) -> String {
        match self.days {
            1 => "1 day".to_string(),
            7 => "1 week".to_string(),
            14 => "2 weeks".to_string(),
            30 => "1 month".to_string(),
            n => format!("{} days", n),
        }
    }
}

impl Serialize for DurationTier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DurationTier", 3)?;
        state.serialize_field("days", &self.days)?;
        state.serialize_field("label", &self.label())?;
        state.serialize_field("multiplier", &self.multiplier().to_string())?;
        state.end()
    }
}

/// Durations offered by the rental selector. Every value here has a tier.
pub const DURATION_TIERS: [DurationTier; 5] = [
    DurationTier::new(1, 20),
    DurationTier::new(3, 50),
    DurationTier::new(7, 100),
    DurationTier::new(14, 180),
    DurationTier::new(30, 350),
];

/// Default duration preselected in the storefront
pub const DEFAULT_DURATION_DAYS: i32 = 7;

/// Tier with exactly `days`, if one exists
pub fn find_tier(days: i32) -> Option<&'static DurationTier> {
    DURATION_TIERS.iter().find(|tier| tier.days == days)
}

/// Multiplier for `days`. Durations without a tier price at 1.0.
pub fn multiplier_for(days: i32) -> Decimal {
    find_tier(days)
        .map(DurationTier::multiplier)
        .unwrap_or(Decimal::ONE)
}

/// Price of renting for `days` given the weekly base price.
///
/// Total for any integer `days`; no rounding is applied here.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use happydiving_storefront::rental::rental_price;
///
/// assert_eq!(rental_price(dec!(120.00), 14), dec!(216.00));
/// assert_eq!(rental_price(dec!(120.00), 2), dec!(120.00));   // no tier, x1.0
/// ```
pub fn rental_price(base_weekly_price: Decimal, days: i32) -> Decimal {
    base_weekly_price * multiplier_for(days)
}

/// Largest multiplier any duration can apply, including the 1.0 fallback
pub fn max_multiplier() -> Decimal {
    DURATION_TIERS
        .iter()
        .map(DurationTier::multiplier)
        .fold(Decimal::ONE, Decimal::max)
}

/// Whether `rental_price` is defined for `base_weekly_price` at every duration.
///
/// Negative prices and prices whose longest-tier total would overflow
/// `Decimal` are not priceable; callers reject them before quoting.
pub fn is_priceable(base_weekly_price: Decimal) -> bool {
    base_weekly_price >= Decimal::ZERO
        && base_weekly_price.checked_mul(max_multiplier()).is_some()
}

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use happydiving_storefront::rental::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Display form of a money amount: currency code, space, two decimals.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{} {:.2}", currency, round_money(amount, 2))
}
