//! Application state shared across all handlers.

use std::sync::Arc;

use gallery_auth::jwt::decoder::JwtDecoder;
use gallery_auth::jwt::encoder::JwtEncoder;
use gallery_auth::policy::engine::Authorizer;
use gallery_auth::session::manager::SessionManager;
use gallery_cache::provider::CacheManager;
use gallery_core::config::AppConfig;
use gallery_core::result::AppResult;
use gallery_service::gallery::service::GalleryService;
use gallery_store::CredentialStore;
use gallery_store::provider::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// Credential store manager (PostgreSQL or in-memory).
    pub store: Arc<StoreManager>,
    /// Session lifecycle manager.
    pub sessions: Arc<SessionManager>,
    /// Gateway token authorizer.
    pub authorizer: Arc<Authorizer>,
    /// Gallery item pipeline.
    pub gallery: Arc<GalleryService>,
}

impl AppState {
    /// Wires up all components from configuration.
    ///
    /// Used by the server binary and by integration tests, which pass a
    /// configuration selecting the in-memory providers.
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        let cache = Arc::new(CacheManager::new(&config.cache).await?);
        let store = Arc::new(StoreManager::new(&config.store).await?);

        let encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let decoder = Arc::new(JwtDecoder::new(&config.auth)?);

        let credential_store: Arc<dyn CredentialStore> = store.clone();
        let sessions = Arc::new(SessionManager::new(
            credential_store,
            Arc::clone(&cache),
            encoder,
            decoder,
            &config.auth,
        ));
        let authorizer = Arc::new(Authorizer::new(Arc::clone(&sessions)));
        let gallery = Arc::new(GalleryService::new(&config.gallery)?);

        Ok(Self {
            config: Arc::new(config),
            cache,
            store,
            sessions,
            authorizer,
            gallery,
        })
    }
}
