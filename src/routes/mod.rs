//! HTTP routes

pub mod equipment;
pub mod extract;
pub mod health;
pub mod pages;
pub mod rental;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// All storefront routes; the caller adds layers and state
pub fn router() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/equipment", get(pages::equipment))
        // Equipment API
        .route("/api/equipment", get(equipment::list))
        .route("/api/equipment/categories", get(equipment::categories))
        .route("/api/equipment/:id", get(equipment::detail))
        .route("/api/equipment/:id/quote", get(equipment::quote))
        .route("/api/equipment/:id/availability", get(equipment::availability))
        // Packages and rental pricing
        .route("/api/packages", get(rental::packages))
        .route("/api/packages/:id/quote", get(rental::package_quote))
        .route("/api/rental/tiers", get(rental::tiers))
        .route("/api/rental/quote", post(rental::quote))
        .route("/api/rental/reserve", post(rental::reserve))
        // Monitoring
        .route("/health", get(health::health))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::AppState;

    pub fn app() -> Router {
        let config = Config::from_lookup(|_| None).expect("default config");
        super::router().with_state(AppState::new(config))
    }

    pub async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.expect("infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
    }

    pub async fn get(uri: &str) -> (StatusCode, String) {
        send(Request::get(uri).body(Body::empty()).expect("request")).await
    }

    pub async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_str(&body).expect("json body"))
    }
}
