use crate::schemas::{ApiError, ApiResponse, AppState, CategoryListResponse, ErrorResponse, ProductListResponse};
use axum::{
    extract::{Path, State},
    response::Json,
};
use catalog::{CategoryDescriptor, Product, build_category_list, find_category};
use tracing::{debug, info, instrument, warn};

/// List the landing page categories with their product counts
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories in display order", body = CategoryListResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn get_categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<CategoryDescriptor>>> {
    let categories = build_category_list(&state.catalog);
    info!("Returning {} categories", categories.len());
    Json(ApiResponse::ok(categories))
}

/// List the products of a category
#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}/products",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Products in the category", body = ProductListResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn get_category_products(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    debug!("Fetching products for category: {}", slug);

    // Slugs outside the category table are still served if the catalog has them.
    if find_category(&slug).is_err() && state.catalog.entry(&slug).is_none() {
        warn!("Category {} not found", slug);
        return Err(ApiError::CategoryNotFound(slug));
    }

    let products = state.catalog.products(&slug).to_vec();
    info!("Category {} has {} products", slug, products.len());
    Ok(Json(ApiResponse::ok(products)))
}
