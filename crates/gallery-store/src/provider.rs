//! Store manager that dispatches to the configured credential store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use gallery_core::config::StoreConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;
use gallery_entity::User;

use crate::{CredentialStore, MemoryCredentialStore, PostgresCredentialStore};

/// Store manager that wraps the configured credential store.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner credential store.
    inner: Arc<dyn CredentialStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn CredentialStore> = match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL credential store");
                Arc::new(PostgresCredentialStore::connect(config).await?)
            }
            "memory" => {
                info!("Initializing in-memory credential store");
                Arc::new(MemoryCredentialStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, postgres"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing store (for testing).
    pub fn from_store(store: Arc<dyn CredentialStore>) -> Self {
        Self { inner: store }
    }
}

#[async_trait]
impl CredentialStore for StoreManager {
    async fn load(&self, email: &str) -> AppResult<Option<User>> {
        self.inner.load(email).await
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        self.inner.create(user).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
