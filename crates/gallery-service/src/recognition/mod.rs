//! Image label detection behind a pluggable backend.

pub mod disabled;
pub mod http;

pub use disabled::DisabledLabelDetector;
pub use http::HttpLabelDetector;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use gallery_core::config::gallery::RecognitionConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;

/// Boundary contract for the external image-recognition service.
#[async_trait]
pub trait LabelDetector: Send + Sync + std::fmt::Debug + 'static {
    /// Detect labels in the given image bytes.
    async fn detect(&self, image: &[u8]) -> AppResult<Vec<String>>;
}

/// Builds the configured label detector.
pub fn from_config(config: &RecognitionConfig) -> AppResult<Arc<dyn LabelDetector>> {
    match config.provider.as_str() {
        "http" => {
            info!(url = %config.url, "Initializing HTTP label detector");
            Ok(Arc::new(HttpLabelDetector::new(config)?))
        }
        "none" => {
            info!("Label detection disabled");
            Ok(Arc::new(DisabledLabelDetector))
        }
        other => Err(AppError::configuration(format!(
            "Unknown recognition provider: '{other}'. Supported: none, http"
        ))),
    }
}
