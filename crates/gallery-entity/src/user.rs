//! User entity model.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The email is the unique identity, stored case-sensitively. The password
/// hash is a one-way SHA-256 hex digest and is never reversible. The entity
/// is serialized in full into the session cache, so the hash participates
/// in (de)serialization; it must never appear in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login identity.
    pub email: String,
    /// SHA-256 hex digest of the password.
    pub password_hash: String,
}

impl User {
    /// Creates a new user record from an email and a pre-computed digest.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
