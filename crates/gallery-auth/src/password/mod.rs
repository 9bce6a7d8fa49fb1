//! Credential digesting and verification.

pub mod hasher;

pub use hasher::PasswordHasher;
