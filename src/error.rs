//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::catalog::CatalogError;
use crate::rental::responses::ErrorResponse;

/// Error type for server-rendered pages
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Page not found"),
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "Catalog unavailable")
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
        };

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head><title>{} - Happy Diving</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/">Return to homepage</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Error type for the JSON API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Equipment item '{0}' not found")]
    ItemNotFound(String),

    #[error("Package '{0}' not found")]
    PackageNotFound(String),

    #[error("Equipment item '{0}' is not available for rent")]
    NotRentable(String),

    #[error("Sign in to rent equipment")]
    LoginRequired,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::ItemNotFound(_) | ApiError::PackageNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotRentable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::LoginRequired => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::ItemNotFound(_) => "item_not_found",
            ApiError::PackageNotFound(_) => "package_not_found",
            ApiError::NotRentable(_) => "not_rentable",
            ApiError::LoginRequired => "login_required",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Catalog(_) => "catalog_unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("API error: {}", self);
        } else {
            tracing::debug!("API error: {}", self);
        }

        let body = ErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
