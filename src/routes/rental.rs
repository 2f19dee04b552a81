//! Rental pricing and package handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiResult;
use crate::rental::requests::{QuoteQuery, QuoteRequest, ReserveRequest};
use crate::rental::responses::{
    DurationTiersResponse, PackageResponse, RentalIntentResponse, RentalQuoteResponse,
};
use crate::rental::{services, DEFAULT_DURATION_DAYS, DURATION_TIERS};
use crate::routes::extract::{ApiJson, ApiQuery};
use crate::session::MaybeSession;
use crate::AppState;

/// Duration options for the rental selector
pub async fn tiers() -> Json<DurationTiersResponse> {
    Json(DurationTiersResponse {
        tiers: DURATION_TIERS.to_vec(),
        default_days: DEFAULT_DURATION_DAYS,
    })
}

/// Quote an arbitrary weekly price
pub async fn quote(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuoteRequest>,
) -> ApiResult<Json<RentalQuoteResponse>> {
    services::quote_base_price(request.base_weekly_price, request.days, state.currency()).map(Json)
}

/// All packages with their included items
pub async fn packages(State(state): State<AppState>) -> ApiResult<Json<Vec<PackageResponse>>> {
    let catalog = state.catalog().await?;
    Ok(Json(services::list_packages(&catalog, state.currency())))
}

/// Rental quote for a package
pub async fn package_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<QuoteQuery>,
) -> ApiResult<Json<RentalQuoteResponse>> {
    let catalog = state.catalog().await?;
    services::quote_package(&catalog, &id, query.days, state.currency()).map(Json)
}

/// "Rent now" call-to-action: guests are asked to sign in
pub async fn reserve(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    ApiJson(request): ApiJson<ReserveRequest>,
) -> ApiResult<Json<RentalIntentResponse>> {
    let catalog = state.catalog().await?;
    let intent = services::start_rental(
        &catalog,
        session.as_ref(),
        &request.item_id,
        request.days,
        state.currency(),
    )?;

    tracing::info!(
        "Rental intent for {} ({} days) by session {}",
        request.item_id,
        request.days,
        session.map(|s| s.token().to_string()).unwrap_or_default()
    );
    Ok(Json(intent))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{get_json, send};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use uuid::Uuid;

    fn post_json(uri: &str, body: &str, token: Option<Uuid>) -> Request<Body> {
        let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_tiers() {
        let (status, json) = get_json("/api/rental/tiers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["default_days"], 7);

        let multipliers: Vec<&str> = json["tiers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["multiplier"].as_str().unwrap())
            .collect();
        assert_eq!(multipliers, vec!["0.2", "0.5", "1", "1.8", "3.5"]);
    }

    #[tokio::test]
    async fn test_quote_base_price() {
        let request = post_json(
            "/api/rental/quote",
            r#"{"base_weekly_price": "120.00", "days": 14}"#,
            None,
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["total"]["display"], "USD 216.00");
        assert_eq!(json["tier_matched"], true);
    }

    #[tokio::test]
    async fn test_quote_fallback_and_negative() {
        let (status, body) = send(post_json(
            "/api/rental/quote",
            r#"{"base_weekly_price": "80", "days": 2}"#,
            None,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["multiplier"], "1");
        assert_eq!(json["tier_matched"], false);
        assert_eq!(json["total"]["display"], "USD 80.00");

        let (status, _) = send(post_json(
            "/api/rental/quote",
            r#"{"base_weekly_price": "-10", "days": 7}"#,
            None,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_quote_overflowing_price_is_bad_request() {
        let (status, body) = send(post_json(
            "/api/rental/quote",
            r#"{"base_weekly_price": "79228162514264337593543950335", "days": 30}"#,
            None,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error_type"], "bad_request");
    }

    #[tokio::test]
    async fn test_malformed_input_is_json_bad_request() {
        let (status, body) = send(post_json(
            "/api/rental/quote",
            r#"{"base_weekly_price": "cheap"}"#,
            None,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error_type"], "bad_request");

        let (status, json) = get_json("/api/packages/pkg-snorkel/quote?days=week").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error_type"], "bad_request");
    }

    #[tokio::test]
    async fn test_packages_and_package_quote() {
        let (status, json) = get_json("/api/packages").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 2);

        let (status, json) = get_json("/api/packages/pkg-snorkel/quote?days=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["package_id"], "pkg-snorkel");
        assert_eq!(json["total"]["display"], "USD 25.00");

        let (status, _) = get_json("/api/packages/pkg-none/quote").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reserve_requires_session() {
        let body = r#"{"item_id": "bcd-001", "days": 7}"#;

        let (status, guest) = send(post_json("/api/rental/reserve", body, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(guest.contains("login_required"));

        let (status, member) =
            send(post_json("/api/rental/reserve", body, Some(Uuid::new_v4()))).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&member).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["quote"]["item_id"], "bcd-001");
    }
}
