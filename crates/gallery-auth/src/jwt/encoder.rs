//! Session token creation.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::warn;
use uuid::Uuid;

use gallery_core::config::AuthConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;

use super::claims::Claims;

/// Creates HS256-signed session tokens binding a principal identity.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// The signing key is decoded once from the base64 secret. When the
    /// built-in development secret is still in place a warning is logged;
    /// it must not be used in production.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        if config.signing_secret == AuthConfig::default().signing_secret {
            warn!("Using the built-in development signing secret; set auth.signing_secret for production");
        }

        let secret = super::decode_secret(&config.signing_secret)?;
        Ok(Self {
            encoding_key: EncodingKey::from_secret(&secret),
        })
    }

    /// Issues a fresh signed token for the given principal.
    ///
    /// Tokens are never derived from client input and never reused: the
    /// embedded token ID is freshly generated on every call.
    pub fn issue(&self, principal: &str) -> AppResult<String> {
        let claims = Claims {
            iss: principal.to_string(),
            iat: Utc::now().timestamp(),
            jti: Uuid::new_v4(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}
