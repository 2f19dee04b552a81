//! Rental quoting against the loaded catalog.
//!
//! These functions resolve items and packages from a catalog snapshot and run
//! them through the calculator. Guard rails on inputs live here, never in the
//! calculator itself.

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{ApiError, ApiResult};
use crate::session::{CallToAction, Session};

use super::calculators::{find_tier, is_priceable, multiplier_for, rental_price};
use super::responses::{MoneyResponse, PackageResponse, RentalIntentResponse, RentalQuoteResponse};

fn build_quote(base: Decimal, days: i32, currency: &str) -> RentalQuoteResponse {
    RentalQuoteResponse {
        item_id: None,
        package_id: None,
        days,
        multiplier: multiplier_for(days),
        tier_matched: find_tier(days).is_some(),
        base_weekly_price: MoneyResponse::new(base, currency),
        total: MoneyResponse::new(rental_price(base, days), currency),
    }
}

/// Quote an arbitrary weekly price. Negative and out-of-range prices are rejected.
pub fn quote_base_price(base: Decimal, days: i32, currency: &str) -> ApiResult<RentalQuoteResponse> {
    if base < Decimal::ZERO {
        return Err(ApiError::BadRequest(
            "base_weekly_price must not be negative".to_string(),
        ));
    }
    if !is_priceable(base) {
        return Err(ApiError::BadRequest(
            "base_weekly_price is too large to quote".to_string(),
        ));
    }
    Ok(build_quote(base, days, currency))
}

/// Quote a rentable catalog item
pub fn quote_item(
    catalog: &Catalog,
    item_id: &str,
    days: i32,
    currency: &str,
) -> ApiResult<RentalQuoteResponse> {
    let item = catalog
        .item(item_id)
        .ok_or_else(|| ApiError::ItemNotFound(item_id.to_string()))?;

    if !item.is_rentable {
        return Err(ApiError::NotRentable(item_id.to_string()));
    }

    debug!("Quoting {} for {} days", item.id, days);
    Ok(RentalQuoteResponse {
        item_id: Some(item.id.clone()),
        ..build_quote(item.rental_price, days, currency)
    })
}

/// Quote a package at its own weekly price
pub fn quote_package(
    catalog: &Catalog,
    package_id: &str,
    days: i32,
    currency: &str,
) -> ApiResult<RentalQuoteResponse> {
    let package = catalog
        .package(package_id)
        .ok_or_else(|| ApiError::PackageNotFound(package_id.to_string()))?;

    Ok(RentalQuoteResponse {
        package_id: Some(package.id.clone()),
        ..build_quote(package.rental_price, days, currency)
    })
}

/// All packages with their items resolved
pub fn list_packages(catalog: &Catalog, currency: &str) -> Vec<PackageResponse> {
    catalog
        .packages
        .iter()
        .map(|package| PackageResponse {
            id: package.id.clone(),
            name: package.name.clone(),
            description: package.description.clone(),
            rental_price: MoneyResponse::new(package.rental_price, currency),
            items: catalog.package_items(package),
        })
        .collect()
}

/// Act on the "Rent now" call-to-action.
///
/// Guests are sent to sign in. Members get a pending intent; nothing is
/// booked or stored.
pub fn start_rental(
    catalog: &Catalog,
    session: Option<&Session>,
    item_id: &str,
    days: i32,
    currency: &str,
) -> ApiResult<RentalIntentResponse> {
    match CallToAction::for_session(session) {
        CallToAction::SignIn => Err(ApiError::LoginRequired),
        CallToAction::Reserve => {
            let quote = quote_item(catalog, item_id, days, currency)?;
            Ok(RentalIntentResponse {
                status: "pending",
                quote,
            })
        }
    }
}
