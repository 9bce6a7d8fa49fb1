//! Health check handler.

use axum::Json;
use axum::extract::State;

use gallery_core::traits::cache::CacheProvider;
use gallery_store::CredentialStore;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let store = match state.store.health_check().await {
        Ok(true) => "connected",
        _ => "unavailable",
    };
    let cache = match state.cache.health_check().await {
        Ok(true) => "connected",
        _ => "unavailable",
    };

    let status = if store == "connected" && cache == "connected" {
        "ok"
    } else {
        "degraded"
    };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.to_string(),
        cache: cache.to_string(),
    }))
}
