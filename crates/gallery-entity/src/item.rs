//! Gallery item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ASCII-art gallery entry owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// The rendered ASCII art.
    pub ascii: String,
    /// Labels detected in the source image.
    pub labels: Vec<String>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

impl GalleryItem {
    /// Creates a new gallery item with a fresh id and the current timestamp.
    pub fn new(ascii: String, labels: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ascii,
            labels,
            created_at: Utc::now(),
        }
    }
}
