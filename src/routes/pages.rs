//! Server-rendered storefront pages

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::catalog::{category_counts, CategoryCount, CategoryFilter};
use crate::error::{AppError, Result};
use crate::models::{EquipmentItem, Package, Testimonial};
use crate::rental::{format_money, rental_price, DEFAULT_DURATION_DAYS, DURATION_TIERS};
use crate::routes::equipment::ListQuery;
use crate::session::{CallToAction, MaybeSession};
use crate::AppState;

const FEATURED_ITEMS: usize = 3;

/// Equipment card as shown in listings
struct ItemCard {
    id: String,
    name: String,
    brand: String,
    category: &'static str,
    weekly_price: String,
    rating: String,
    review_count: usize,
    in_stock: bool,
    tier_prices: Vec<TierPrice>,
}

/// Price of one duration tier for a card
struct TierPrice {
    label: String,
    price: String,
    is_default: bool,
}

impl ItemCard {
    fn new(item: &EquipmentItem, currency: &str) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            brand: item.brand.clone(),
            category: item.category.label(),
            weekly_price: format_money(item.rental_price, currency),
            rating: format!("{:.1}", item.rating),
            review_count: item.review_count(),
            in_stock: item.in_stock(),
            tier_prices: DURATION_TIERS
                .iter()
                .map(|tier| TierPrice {
                    label: tier.label(),
                    price: format_money(rental_price(item.rental_price, tier.days), currency),
                    is_default: tier.days == DEFAULT_DURATION_DAYS,
                })
                .collect(),
        }
    }
}

struct PackageCard {
    name: String,
    description: String,
    weekly_price: String,
    item_count: usize,
}

impl PackageCard {
    fn new(package: &Package, currency: &str) -> Self {
        Self {
            name: package.name.clone(),
            description: package.description.clone(),
            weekly_price: format_money(package.rental_price, currency),
            item_count: package.item_ids.len(),
        }
    }
}

/// Home page template
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    testimonial: Option<Testimonial>,
    counts: Vec<CategoryCount>,
    featured: Vec<ItemCard>,
    cta_label: &'static str,
}

/// Equipment listing template
#[derive(Template)]
#[template(path = "equipment/list.html")]
struct EquipmentTemplate {
    selected: &'static str,
    heading: &'static str,
    counts: Vec<CategoryCount>,
    items: Vec<ItemCard>,
    packages: Vec<PackageCard>,
    cta_label: &'static str,
    is_guest: bool,
}

/// Homepage handler
pub async fn home(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Html<String>> {
    let catalog = state.catalog().await?;
    let listing = state.cache.listing(&catalog, CategoryFilter::All).await;

    let testimonial = state
        .rotator
        .current(catalog.testimonials.len())
        .map(|i| catalog.testimonials[i].clone());

    let template = HomeTemplate {
        testimonial,
        counts: category_counts(&catalog.items),
        featured: listing
            .iter()
            .filter(|item| item.in_stock())
            .take(FEATURED_ITEMS)
            .map(|item| ItemCard::new(item, state.currency()))
            .collect(),
        cta_label: CallToAction::for_session(session.as_ref()).label(),
    };

    Ok(Html(template.render()?))
}

/// Equipment listing page with category selector
pub async fn equipment(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    let filter = query.filter().map_err(|_| AppError::NotFound)?;
    let catalog = state.catalog().await?;
    let listing = state.cache.listing(&catalog, filter).await;

    let template = EquipmentTemplate {
        selected: filter.slug(),
        heading: filter.label(),
        counts: category_counts(&catalog.items),
        items: listing
            .iter()
            .map(|item| ItemCard::new(item, state.currency()))
            .collect(),
        packages: catalog
            .packages
            .iter()
            .map(|package| PackageCard::new(package, state.currency()))
            .collect(),
        cta_label: CallToAction::for_session(session.as_ref()).label(),
        is_guest: session.is_none(),
    };

    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::get;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_home_renders() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Happy Diving"));
        assert!(body.contains("Sign in to rent"));
        // First testimonial before any rotation tick
        assert!(body.contains("Sarah Mitchell"));
    }

    #[tokio::test]
    async fn test_equipment_page_filters() {
        let (status, body) = get("/equipment?category=masks").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ocean Vision Pro Mask"));
        assert!(!body.contains("Frameless Tech Mask"));
        assert!(!body.contains("Power Stroke Open Heel Fins"));
        assert!(body.contains("USD 25.00"));
    }

    #[tokio::test]
    async fn test_equipment_cards_show_tier_prices() {
        let (status, body) = get("/equipment?category=masks").await;
        assert_eq!(status, StatusCode::OK);

        // Ocean Vision Pro Mask at 25.00 a week
        assert!(body.contains("1 day: USD 5.00"));
        assert!(body.contains("3 days: USD 12.50"));
        assert!(body.contains("2 weeks: USD 45.00"));
        assert!(body.contains("1 month: USD 87.50"));
        assert!(!body.contains("/api/rental/quote"));
    }

    #[tokio::test]
    async fn test_equipment_page_lists_packages() {
        let (status, body) = get("/equipment").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="packages""#));
        assert!(body.contains("Snorkel Starter"));
        assert!(body.contains("USD 320.00"));
    }

    #[tokio::test]
    async fn test_equipment_page_unknown_category() {
        let (status, _) = get("/equipment?category=spearguns").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
