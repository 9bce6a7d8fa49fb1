//! Image-to-ASCII rendering using a luminance ramp.

use image::imageops::FilterType;
use tracing::debug;

use gallery_core::config::gallery::AsciiConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;

/// Character ramp ordered from dense (dark) to sparse (light).
const RAMP: &[u8] =
    b"$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Renders raw image bytes into ASCII art.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    /// Output width in characters.
    width: u32,
}

impl AsciiRenderer {
    /// Creates a renderer from configuration.
    pub fn new(config: &AsciiConfig) -> Self {
        Self {
            width: config.width.max(1),
        }
    }

    /// Converts an image into ASCII art.
    ///
    /// The image is scaled to the configured character width; the row
    /// count is halved relative to the aspect ratio because terminal
    /// glyphs are roughly twice as tall as they are wide. Each pixel's
    /// luminance selects a ramp character.
    pub fn render(&self, image_bytes: &[u8]) -> AppResult<String> {
        let img = image::load_from_memory(image_bytes)
            .map_err(|e| AppError::validation(format!("Unrecognized image data: {e}")))?;

        debug!(
            width = img.width(),
            height = img.height(),
            "Converting image to ascii"
        );

        let cols = self.width;
        let rows = ((img.height() as f32 / img.width() as f32) * cols as f32 * 0.5)
            .round()
            .max(1.0) as u32;

        let gray = img.resize_exact(cols, rows, FilterType::Triangle).to_luma8();

        let mut out = String::with_capacity(((cols + 1) * rows) as usize);
        for row in gray.rows() {
            for pixel in row {
                let idx = (pixel.0[0] as usize * (RAMP.len() - 1)) / 255;
                out.push(RAMP[idx] as char);
            }
            out.push('\n');
        }
        Ok(out)
    }
}
