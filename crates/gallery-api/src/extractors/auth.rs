//! `AuthUser` extractor — pulls the session token from the Authorization
//! header and resolves it to a live session principal.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use gallery_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated principal for the current request.
///
/// Extraction fails with 401 when the header is absent, malformed, or the
/// token has no live session behind it.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The session's principal (the account email).
    pub principal: String,
    /// The raw token the request presented.
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let principal = state.sessions.validate_session(token).await?;

        Ok(AuthUser {
            principal,
            token: token.to_string(),
        })
    }
}
