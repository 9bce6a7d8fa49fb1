//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use gallery_core::config::AuthConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;

use super::claims::Claims;

/// Validates session token signatures and extracts the embedded principal.
///
/// The decoder checks the signature and claim shape only. It deliberately
/// does **not** check freshness: expiry is enforced by the session cache
/// TTL, not by the token itself.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let secret = super::decode_secret(&config.signing_secret)?;

        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp claim; liveness lives in the cache.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            decoding_key: DecodingKey::from_secret(&secret),
            validation,
        })
    }

    /// Decodes a token and returns the embedded principal.
    ///
    /// Fails when the signature does not verify, the token is malformed,
    /// or the principal claim is missing.
    pub fn resolve_principal(&self, token: &str) -> AppResult<String> {
        let claims = self.decode(token)?;
        if claims.iss.is_empty() {
            return Err(AppError::authentication("Token is missing the principal claim"));
        }
        Ok(claims.iss)
    }

    /// Decodes a token into its typed claims.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}
