//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gallery_entity::GalleryItem;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The freshly issued session token.
    pub token: String,
}

/// Token validation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// The principal the live session belongs to.
    pub principal: String,
}

/// Gallery item summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItemResponse {
    /// Item id.
    pub id: Uuid,
    /// Rendered ASCII art.
    pub ascii: String,
    /// Detected labels.
    pub labels: Vec<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<GalleryItem> for GalleryItemResponse {
    fn from(item: GalleryItem) -> Self {
        Self {
            id: item.id,
            ascii: item.ascii,
            labels: item.labels,
            created_at: item.created_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Credential store reachability.
    pub store: String,
    /// Cache reachability.
    pub cache: String,
}
