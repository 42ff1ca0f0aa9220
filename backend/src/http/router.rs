//! Router configuration for the HTTP API.
//!
//! Sets up all routes, middleware (CORS, compression, tracing), and creates
//! the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{clusters::GET_CLUSTERS, insights::GET_INSIGHTS, recipes::GET_RECIPES};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The dashboard frontend is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(GET_INSIGHTS, get(handlers::get_insights))
        .route(GET_RECIPES, get(handlers::get_recipes))
        .route(GET_CLUSTERS, get(handlers::get_clusters))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
