//! The gallery item pipeline.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::info;
use uuid::Uuid;

use gallery_core::config::gallery::GalleryConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;
use gallery_entity::GalleryItem;

use crate::ascii::AsciiRenderer;
use crate::index::{self, GalleryIndex};
use crate::recognition::{self, LabelDetector};

/// Orchestrates the gallery pipeline: decode the uploaded image, detect
/// labels, render ASCII art, and index the resulting item per owner.
#[derive(Debug, Clone)]
pub struct GalleryService {
    renderer: AsciiRenderer,
    detector: Arc<dyn LabelDetector>,
    index: Arc<dyn GalleryIndex>,
}

impl GalleryService {
    /// Build the service from configuration, selecting the recognition
    /// and index backends.
    pub fn new(config: &GalleryConfig) -> AppResult<Self> {
        Ok(Self {
            renderer: AsciiRenderer::new(&config.ascii),
            detector: recognition::from_config(&config.recognition)?,
            index: index::from_config(&config.index)?,
        })
    }

    /// Build the service from explicit parts. Used by tests to inject
    /// in-memory backends.
    pub fn from_parts(
        renderer: AsciiRenderer,
        detector: Arc<dyn LabelDetector>,
        index: Arc<dyn GalleryIndex>,
    ) -> Self {
        Self {
            renderer,
            detector,
            index,
        }
    }

    /// Create a gallery item from a base64-encoded image and index it
    /// under the owner principal.
    pub async fn create_item(&self, owner: &str, base64_image: &str) -> AppResult<GalleryItem> {
        let trimmed = base64_image.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Image payload must not be empty"));
        }

        let image_bytes = STANDARD
            .decode(trimmed)
            .map_err(|e| AppError::validation(format!("Image payload is not valid base64: {e}")))?;

        let ascii = self.renderer.render(&image_bytes)?;
        let labels = self.detector.detect(&image_bytes).await?;

        let item = GalleryItem::new(ascii, labels);
        self.index.add(owner, &item).await?;

        info!(owner = %owner, id = %item.id, labels = item.labels.len(), "Gallery item created");
        Ok(item)
    }

    /// List the owner's items, newest first.
    pub async fn list_items(
        &self,
        owner: &str,
        from: usize,
        size: usize,
    ) -> AppResult<Vec<GalleryItem>> {
        self.index.list(owner, from, size).await
    }

    /// Delete the owner's item by id.
    pub async fn delete_item(&self, owner: &str, id: Uuid) -> AppResult<()> {
        if self.index.remove(owner, id).await? {
            info!(owner = %owner, id = %id, "Gallery item deleted");
            Ok(())
        } else {
            Err(AppError::not_found(format!("Gallery item not found: {id}")))
        }
    }
}
