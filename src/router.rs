use crate::config::ServerConfig;
use crate::handlers::{
    categories::{get_categories, get_category_products},
    health::health_check,
    search::search_products,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
///
/// Paths that match no route are served from the frontend build directory;
/// anything missing there falls back to `index.html` so client-side routes
/// such as `/products/cctv` and `/search?query=...` survive a reload.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let index = config.static_dir.join("index.html");
    let frontend = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog routes
        .route("/api/v1/categories", get(get_categories))
        .route("/api/v1/categories/:slug/products", get(get_category_products))
        .route("/api/v1/search", get(search_products))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Frontend
        .fallback_service(frontend)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
