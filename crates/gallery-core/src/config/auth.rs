//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base64-encoded HMAC secret for token signing (HS256).
    ///
    /// The default is a fixed development value and **must** be replaced
    /// in production (`GALLERY__AUTH__SIGNING_SECRET` or the `auth`
    /// section of the config file).
    #[serde(default = "default_signing_secret")]
    pub signing_secret: String,
    /// Session time-to-live in seconds. Liveness of a session is enforced
    /// purely by the cache TTL; tokens carry no embedded expiry.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_secret: default_signing_secret(),
            session_ttl_seconds: default_session_ttl(),
        }
    }
}

// base64("top-secret-change-it") — development fallback only.
fn default_signing_secret() -> String {
    "dG9wLXNlY3JldC1jaGFuZ2UtaXQ=".to_string()
}

fn default_session_ttl() -> u64 {
    3600
}
