//! Gallery feature configuration: ASCII rendering, recognition, indexing.

use serde::{Deserialize, Serialize};

/// Configuration for the gallery item pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// ASCII rendering settings.
    #[serde(default)]
    pub ascii: AsciiConfig,
    /// Image recognition settings.
    #[serde(default)]
    pub recognition: RecognitionConfig,
    /// Gallery index settings.
    #[serde(default)]
    pub index: IndexConfig,
}

/// ASCII art rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsciiConfig {
    /// Output width in characters. Height is derived from the image's
    /// aspect ratio, compensated for terminal glyph proportions.
    #[serde(default = "default_width")]
    pub width: u32,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
        }
    }
}

/// Image recognition backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Recognition provider: `"none"` or `"http"`.
    #[serde(default = "default_recognition_provider")]
    pub provider: String,
    /// Endpoint URL of the label-detection service (http provider only).
    #[serde(default)]
    pub url: String,
    /// Maximum number of labels to keep per image.
    #[serde(default = "default_max_labels")]
    pub max_labels: usize,
    /// Minimum confidence (0–100) for a label to be kept.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            provider: default_recognition_provider(),
            url: String::new(),
            max_labels: default_max_labels(),
            min_confidence: default_min_confidence(),
        }
    }
}

/// Gallery index backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Index provider: `"memory"` or `"elasticsearch"`.
    #[serde(default = "default_index_provider")]
    pub provider: String,
    /// Elasticsearch base URL (elasticsearch provider only).
    #[serde(default)]
    pub url: String,
    /// Index name holding gallery items.
    #[serde(default = "default_index_name")]
    pub name: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            provider: default_index_provider(),
            url: String::new(),
            name: default_index_name(),
        }
    }
}

fn default_width() -> u32 {
    80
}

fn default_recognition_provider() -> String {
    "none".to_string()
}

fn default_max_labels() -> usize {
    10
}

fn default_min_confidence() -> f32 {
    60.0
}

fn default_index_provider() -> String {
    "memory".to_string()
}

fn default_index_name() -> String {
    "gallery".to_string()
}
