//! HTTP server setup with Axum

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::rest::eventos;
use super::state::AppState;

/// Create the Axum router with all endpoints
///
/// Anything not matched by the API is served from `static_dir`, so `/`
/// returns its `index.html` landing page.
pub fn create_router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route(
            "/api/eventos",
            get(eventos::list_eventos).post(eventos::create_evento),
        )
        .route(
            "/api/eventos/:id",
            put(eventos::update_evento).delete(eventos::delete_evento),
        )
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
