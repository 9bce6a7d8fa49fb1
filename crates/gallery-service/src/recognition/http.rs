//! HTTP label-detection client.
//!
//! Posts the image to a recognition endpoint and keeps at most
//! `max_labels` labels at or above `min_confidence`.

use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::info;

use gallery_core::config::gallery::RecognitionConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;

use super::LabelDetector;

/// Label detector backed by an HTTP recognition service.
#[derive(Debug, Clone)]
pub struct HttpLabelDetector {
    client: reqwest::Client,
    url: String,
    max_labels: usize,
    min_confidence: f32,
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    image: &'a str,
    max_labels: usize,
    min_confidence: f32,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    labels: Vec<DetectedLabel>,
}

#[derive(Debug, Deserialize)]
struct DetectedLabel {
    name: String,
    confidence: f32,
}

impl HttpLabelDetector {
    /// Creates a new detector from configuration.
    pub fn new(config: &RecognitionConfig) -> AppResult<Self> {
        if config.url.is_empty() {
            return Err(AppError::configuration(
                "recognition.url is required for the http provider",
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            url: config.url.clone(),
            max_labels: config.max_labels,
            min_confidence: config.min_confidence,
        })
    }
}

#[async_trait]
impl LabelDetector for HttpLabelDetector {
    async fn detect(&self, image: &[u8]) -> AppResult<Vec<String>> {
        info!("Recognizing image labels");

        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let response = self
            .client
            .post(&self.url)
            .json(&DetectRequest {
                image: &encoded,
                max_labels: self.max_labels,
                min_confidence: self.min_confidence,
            })
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Label detection request failed: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Label detection returned status {}",
                response.status()
            )));
        }

        let body: DetectResponse = response.json().await.map_err(|e| {
            AppError::external_service(format!("Malformed label detection response: {e}"))
        })?;

        let labels = body
            .labels
            .into_iter()
            .filter(|label| label.confidence >= self.min_confidence)
            .take(self.max_labels)
            .map(|label| label.name)
            .collect();
        Ok(labels)
    }
}
