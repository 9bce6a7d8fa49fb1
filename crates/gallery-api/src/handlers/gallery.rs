//! Gallery handlers — create, list, delete.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::{CreateGalleryItemRequest, ListGalleryQuery};
use crate::dto::response::{ApiResponse, GalleryItemResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/gallery
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateGalleryItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GalleryItemResponse>>), ApiError> {
    let item = state
        .gallery
        .create_item(&auth.principal, &req.image)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(GalleryItemResponse::from(item))),
    ))
}

/// GET /api/gallery
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListGalleryQuery>,
) -> Result<Json<ApiResponse<Vec<GalleryItemResponse>>>, ApiError> {
    let items = state
        .gallery
        .list_items(&auth.principal, query.from, query.size)
        .await?;

    Ok(Json(ApiResponse::ok(
        items.into_iter().map(GalleryItemResponse::from).collect(),
    )))
}

/// DELETE /api/gallery/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.gallery.delete_item(&auth.principal, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Gallery item deleted".to_string(),
    })))
}
