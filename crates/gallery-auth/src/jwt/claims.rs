//! Claims embedded in every session token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload of a signed session token.
///
/// There is deliberately no `exp` claim: a token stays cryptographically
/// valid indefinitely, and the session is only considered *live* while
/// its cache entry exists. The cache TTL is the single source of truth
/// for liveness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer — the principal (registered email) this session belongs to.
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Token ID. Guarantees every issued token is unique even when two
    /// logins for the same principal land in the same second.
    pub jti: Uuid,
}

impl Claims {
    /// Returns the principal this token was issued to.
    pub fn principal(&self) -> &str {
        &self.iss
    }
}
