//! SHA-256 password digesting and verification.
//!
//! The credential scheme is a fixed, interoperable digest: SHA-256
//! over the UTF-8 bytes of the password, hex-encoded. The digest is
//! computed at registration and compared at login.

use sha2::{Digest, Sha256};

/// Computes and verifies SHA-256 hex digests of passwords.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Computes the SHA-256 hex digest of a plaintext password.
    pub fn digest(&self, password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Verifies a plaintext password against a stored digest.
    ///
    /// The comparison runs over every byte regardless of where the first
    /// mismatch occurs, so verification time does not leak the matching
    /// prefix length.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let computed = self.digest(password);
        constant_time_eq(computed.as_bytes(), stored_hash.as_bytes())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
