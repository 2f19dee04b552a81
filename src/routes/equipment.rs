//! Equipment API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::availability::{availability_calendar, AvailabilityCalendar};
use crate::catalog::{category_counts, CategoryFilter};
use crate::error::{ApiError, ApiResult};
use crate::models::EquipmentItem;
use crate::rental::requests::{AvailabilityQuery, QuoteQuery};
use crate::rental::responses::{CategoryCountsResponse, EquipmentListResponse, RentalQuoteResponse};
use crate::rental::services;
use crate::routes::extract::ApiQuery;
use crate::AppState;

/// Query parameters for equipment listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub category: Option<String>,
}

impl ListQuery {
    pub fn filter(&self) -> Result<CategoryFilter, ApiError> {
        match self.category.as_deref() {
            None => Ok(CategoryFilter::All),
            Some(label) => label
                .parse()
                .map_err(|e: crate::models::UnknownCategory| ApiError::BadRequest(e.to_string())),
        }
    }
}

/// Rentable equipment for the selected category
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Json<EquipmentListResponse>> {
    let filter = query.filter()?;
    let catalog = state.catalog().await?;
    let items = state.cache.listing(&catalog, filter).await;

    Ok(Json(EquipmentListResponse {
        category: filter.slug().to_string(),
        count: items.len(),
        items: items.as_ref().clone(),
    }))
}

/// Item counts for each category selector option
pub async fn categories(State(state): State<AppState>) -> ApiResult<Json<CategoryCountsResponse>> {
    let catalog = state.catalog().await?;
    Ok(Json(CategoryCountsResponse {
        categories: category_counts(&catalog.items),
    }))
}

/// Single item, rentable or not
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<EquipmentItem>> {
    let catalog = state.catalog().await?;
    catalog
        .item(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::ItemNotFound(id))
}

/// Rental quote for one item
pub async fn quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<QuoteQuery>,
) -> ApiResult<Json<RentalQuoteResponse>> {
    let catalog = state.catalog().await?;
    services::quote_item(&catalog, &id, query.days, state.currency()).map(Json)
}

/// Availability calendar for one item
pub async fn availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<AvailabilityQuery>,
) -> ApiResult<Json<AvailabilityCalendar>> {
    let catalog = state.catalog().await?;
    let item = catalog
        .item(&id)
        .ok_or_else(|| ApiError::ItemNotFound(id.clone()))?;

    let from = query
        .from
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    Ok(Json(availability_calendar(
        item,
        catalog.blackouts_for(&id),
        from,
        query.days,
    )))
}
