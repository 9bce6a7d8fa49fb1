//! Cache key builders for all AsciiGallery cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Prefix applied to all AsciiGallery cache keys.
const PREFIX: &str = "gallery";

/// Cache key for a session entry, keyed by the bearer token.
///
/// The token is the sole session key; at most one live session exists
/// per token.
pub fn session(token: &str) -> String {
    format!("{PREFIX}:session:{token}")
}
