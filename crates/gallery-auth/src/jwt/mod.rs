//! Signed session token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;

use base64::Engine as _;

use gallery_core::error::AppError;
use gallery_core::result::AppResult;

/// Decode the base64-encoded signing secret from configuration.
pub(crate) fn decode_secret(secret_b64: &str) -> AppResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(secret_b64.trim())
        .map_err(|e| AppError::configuration(format!("Signing secret is not valid base64: {e}")))
}
