//! HTTP handlers for the REST API.
//!
//! Each handler resolves its query string into a [`FilterSpec`] and hands
//! off to the service layer; store failures become a 500 through [`AppError`].
//!
//! [`FilterSpec`]: crate::models::FilterSpec

use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};

use super::dto::{
    ClusterList, FilterQuery, HealthResponse, InsightsResponse, RecipeListResponse, RootResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        ok: true,
        message: "Nutritional Insights Backend Running".to_string(),
    })
}

/// GET /health
///
/// Reports the service as up and includes the record store's status.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

/// GET /api/insights?dietType=&q=&page=&pageSize=
pub async fn get_insights(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<InsightsResponse> {
    let filter = query.to_filter();
    let data = services::get_insights(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /api/recipes?dietType=&q=&page=&pageSize=
pub async fn get_recipes(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<RecipeListResponse> {
    let filter = query.to_filter();
    let data = services::get_recipes(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /api/clusters
pub async fn get_clusters() -> Json<ClusterList> {
    Json(services::get_clusters())
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
