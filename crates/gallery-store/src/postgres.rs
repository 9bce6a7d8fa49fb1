//! PostgreSQL credential store implementation.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use gallery_core::config::StoreConfig;
use gallery_core::error::{AppError, ErrorKind};
use gallery_core::result::AppResult;
use gallery_entity::User;

use crate::CredentialStore;

/// Credential store backed by a PostgreSQL `users` table.
#[derive(Debug, Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    /// Connect to PostgreSQL and ensure the schema exists.
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                email TEXT PRIMARY KEY,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to ensure users schema", e)
        })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Create a store from an existing pool (for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn load(&self, email: &str) -> AppResult<Option<User>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT email, password_hash FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to load user", e)
                })?;

        Ok(row.map(|(email, password_hash)| User::new(email, password_hash)))
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, $2)")
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create user", e)
            })?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Database health check failed", e)
            })?;
        Ok(true)
    }
}

/// Mask the password in a connection URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
