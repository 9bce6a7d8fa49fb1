//! # gallery-store
//!
//! Credential store backends for AsciiGallery. The store owns the
//! `{email, password_hash}` records; the auth core only reads them and
//! appends new registrations.
//!
//! Two providers are available, selected at runtime:
//!
//! - **memory**: process-local map, used for tests and development
//! - **postgres**: PostgreSQL via sqlx

pub mod memory;
pub mod postgres;
pub mod provider;

use async_trait::async_trait;

use gallery_core::result::AppResult;
use gallery_entity::User;

pub use memory::MemoryCredentialStore;
pub use postgres::PostgresCredentialStore;
pub use provider::StoreManager;

/// Boundary contract for the persistent user record store.
///
/// Failures from the backing store propagate unchanged to the caller;
/// no retries are attempted at this layer.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Load the user registered under `email`, if any.
    async fn load(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a new user record.
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
