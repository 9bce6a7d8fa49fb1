//! Route definitions for the AsciiGallery HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to every handler via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(gallery_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Auth endpoints: register, login, validate, authorize
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/validate", get(handlers::auth::validate))
        .route("/auth/authorize", post(handlers::auth::authorize))
}

/// Gallery endpoints: create, list, delete
fn gallery_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/gallery",
            post(handlers::gallery::create_item).get(handlers::gallery::list_items),
        )
        .route("/gallery/{id}", delete(handlers::gallery::delete_item))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
