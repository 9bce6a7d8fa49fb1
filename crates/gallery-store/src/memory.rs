//! In-memory credential store, used for tests and development.

use async_trait::async_trait;
use dashmap::DashMap;

use gallery_core::result::AppResult;
use gallery_entity::User;

use crate::CredentialStore;

/// Process-local credential store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: DashMap<String, User>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        self.users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
