//! No-op label detector for deployments without a recognition backend.

use async_trait::async_trait;

use gallery_core::result::AppResult;

use super::LabelDetector;

/// Detector that never returns labels.
#[derive(Debug, Clone, Default)]
pub struct DisabledLabelDetector;

#[async_trait]
impl LabelDetector for DisabledLabelDetector {
    async fn detect(&self, _image: &[u8]) -> AppResult<Vec<String>> {
        Ok(Vec::new())
    }
}
