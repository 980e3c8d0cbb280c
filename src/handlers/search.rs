use crate::schemas::{ApiResponse, AppState, SearchRequest, SearchResultsResponse};
use axum::{
    extract::{Query, State},
    response::Json,
};
use catalog::SearchHit;
use tracing::{info, instrument};

/// Search products by name or description
#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchRequest),
    responses(
        (status = 200, description = "Matching products; empty for a blank query", body = SearchResultsResponse)
    ),
    tag = "search"
)]
#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    Query(request): Query<SearchRequest>,
) -> Json<ApiResponse<Vec<SearchHit>>> {
    let hits = state.catalog.search(&request.query);
    info!("Search for '{}' matched {} products", request.query.trim(), hits.len());
    Json(ApiResponse::ok(hits))
}
