//! Per-owner gallery item storage behind a pluggable backend.

pub mod elasticsearch;
pub mod memory;

pub use elasticsearch::ElasticsearchGalleryIndex;
pub use memory::MemoryGalleryIndex;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use gallery_core::config::gallery::IndexConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;
use gallery_entity::GalleryItem;

/// Boundary contract for the gallery item index.
///
/// Items are stored and queried per owner principal; one owner can never
/// see or delete another owner's items through this interface.
#[async_trait]
pub trait GalleryIndex: Send + Sync + std::fmt::Debug + 'static {
    /// Index an item under the given owner.
    async fn add(&self, owner: &str, item: &GalleryItem) -> AppResult<()>;

    /// List the owner's items, newest first.
    async fn list(&self, owner: &str, from: usize, size: usize) -> AppResult<Vec<GalleryItem>>;

    /// Remove the owner's item by id. Returns `false` when no such item
    /// exists under that owner.
    async fn remove(&self, owner: &str, id: Uuid) -> AppResult<bool>;
}

/// Builds the configured gallery index.
pub fn from_config(config: &IndexConfig) -> AppResult<Arc<dyn GalleryIndex>> {
    match config.provider.as_str() {
        "elasticsearch" => {
            info!(url = %config.url, index = %config.name, "Initializing Elasticsearch gallery index");
            Ok(Arc::new(ElasticsearchGalleryIndex::new(config)?))
        }
        "memory" => {
            info!("Initializing in-memory gallery index");
            Ok(Arc::new(MemoryGalleryIndex::new()))
        }
        other => Err(AppError::configuration(format!(
            "Unknown index provider: '{other}'. Supported: memory, elasticsearch"
        ))),
    }
}
