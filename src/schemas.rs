use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use catalog::{CategoryDescriptor, Product, ProductCatalog, SearchHit};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use utoipa::{IntoParams, OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Read-only product catalog
    pub catalog: Arc<ProductCatalog>,
}

/// Query parameters for the search endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchRequest {
    /// Free text matched against product names and descriptions
    #[serde(default)]
    pub query: String,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
#[aliases(
    CategoryListResponse = ApiResponse<Vec<CategoryDescriptor>>,
    ProductListResponse = ApiResponse<Vec<Product>>,
    SearchResultsResponse = ApiResponse<Vec<SearchHit>>
)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            message: String::new(),
            success: true,
        }
    }
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of categories in the loaded catalog
    pub categories: usize,
}

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Category '{0}' not found")]
    CategoryNotFound(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (self.status(), Json(body)).into_response()
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::categories::get_categories,
        crate::handlers::categories::get_category_products,
        crate::handlers::search::search_products,
    ),
    components(
        schemas(
            CategoryListResponse,
            ProductListResponse,
            SearchResultsResponse,
            CategoryDescriptor,
            Product,
            SearchHit,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "categories", description = "Product category endpoints"),
        (name = "search", description = "Product search endpoints"),
    ),
    info(
        title = "Storefront API",
        description = "Read-only product catalog behind the storefront landing page",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
