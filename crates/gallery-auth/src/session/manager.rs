//! Session lifecycle manager — registration, login with rotation, and
//! token lookup with sliding expiration.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use gallery_cache::keys;
use gallery_cache::provider::CacheManager;
use gallery_core::config::AuthConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;
use gallery_core::traits::CacheProvider;
use gallery_entity::User;
use gallery_store::CredentialStore;

use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The account was created.
    Created,
    /// The email is already registered.
    AlreadyExists,
    /// A required field was empty or missing.
    InvalidInput,
}

/// Orchestrates the credential store, password verification, token
/// issuance, and the session cache.
///
/// A session is the cache entry `token -> User` with a TTL. It is created
/// on login, refreshed on every successful lookup, and destroyed when a
/// later login presents the token for rotation or when the TTL lapses.
#[derive(Clone)]
pub struct SessionManager {
    /// Credential store (read on login, appended on registration).
    store: Arc<dyn CredentialStore>,
    /// Session cache.
    cache: Arc<CacheManager>,
    /// Token issuance.
    encoder: Arc<JwtEncoder>,
    /// Token validation.
    decoder: Arc<JwtDecoder>,
    /// Password digesting and verification.
    hasher: PasswordHasher,
    /// Session TTL applied on creation and on every refresh.
    session_ttl: Duration,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        cache: Arc<CacheManager>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            cache,
            encoder,
            decoder,
            hasher: PasswordHasher::new(),
            session_ttl: Duration::from_secs(config.session_ttl_seconds),
        }
    }

    /// Registers a new account.
    ///
    /// Blank fields yield `InvalidInput`; an email already present in the
    /// store yields `AlreadyExists`. The password is digested before it
    /// is persisted; the plaintext never leaves this call.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<RegisterOutcome> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Ok(RegisterOutcome::InvalidInput);
        }

        if self.store.load(email).await?.is_some() {
            debug!(email = %email, "Registration rejected: email already exists");
            return Ok(RegisterOutcome::AlreadyExists);
        }

        let user = User::new(email, self.hasher.digest(password));
        self.store.create(&user).await?;
        info!(email = %email, "Registered new account");
        Ok(RegisterOutcome::Created)
    }

    /// Performs the login flow:
    ///
    /// 1. Load the account; unknown email fails.
    /// 2. Rotate: if the caller presented an existing token, delete its
    ///    session from the cache.
    /// 3. Verify the password; mismatch fails.
    /// 4. Issue a fresh token and cache `token -> user` with the full TTL.
    ///
    /// Rotation runs as soon as the account is found, *before* the
    /// password check: a failed login attempt that presents a stale token
    /// still destroys that session. This ordering is deliberate, documented
    /// product behavior.
    ///
    /// Unknown email and wrong password return the identical error so the
    /// response never reveals whether an account exists.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        existing_token: Option<&str>,
    ) -> AppResult<String> {
        let Some(user) = self.store.load(email).await? else {
            debug!(email = %email, "Login failed: unknown account");
            return Err(Self::invalid_credentials());
        };

        if let Some(token) = existing_token {
            self.cache.delete(&keys::session(token)).await?;
        }

        if !self.hasher.verify(password, &user.password_hash) {
            debug!(email = %email, "Login failed: password mismatch");
            return Err(Self::invalid_credentials());
        }

        let token = self.encoder.issue(&user.email)?;
        self.cache
            .set_json(&keys::session(&token), &user, self.session_ttl)
            .await?;

        info!(email = %user.email, "Login successful");
        Ok(token)
    }

    /// Looks up the session for a token.
    ///
    /// On a hit the entry is rewritten with the full TTL (sliding
    /// expiration) and the user is returned. On a miss `None` is returned;
    /// the credential store is never consulted here.
    pub async fn find_session(&self, token: &str) -> AppResult<Option<User>> {
        let key = keys::session(token);
        match self.cache.get_json::<User>(&key).await? {
            Some(user) => {
                debug!("Session token found, refreshing expiry");
                self.cache.set_json(&key, &user, self.session_ttl).await?;
                Ok(Some(user))
            }
            None => {
                debug!("Session token not found");
                Ok(None)
            }
        }
    }

    /// Validates a session token and returns its principal.
    ///
    /// A cache miss fails closed with `Unauthorized`, even if the token's
    /// signature would still verify. Once the cache vouches for liveness
    /// the principal is re-derived from the signed claims; a signature
    /// failure at that point means the cache holds a token the issuer
    /// never signed, which is an internal invariant violation rather than
    /// a normal auth failure.
    pub async fn validate_session(&self, token: &str) -> AppResult<String> {
        if self.find_session(token).await?.is_none() {
            return Err(AppError::unauthorized("Unauthorized"));
        }

        self.decoder.resolve_principal(token).map_err(|e| {
            AppError::internal(format!("Live session token failed signature validation: {e}"))
        })
    }

    fn invalid_credentials() -> AppError {
        AppError::authentication("Invalid email or password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gallery_core::config::cache::CacheConfig;
    use gallery_core::error::ErrorKind;
    use gallery_store::MemoryCredentialStore;

    async fn manager() -> SessionManager {
        let cache = Arc::new(CacheManager::new(&CacheConfig::default()).await.unwrap());
        let store = Arc::new(MemoryCredentialStore::new());
        let config = AuthConfig::default();
        SessionManager::new(
            store,
            cache,
            Arc::new(JwtEncoder::new(&config).unwrap()),
            Arc::new(JwtDecoder::new(&config).unwrap()),
            &config,
        )
    }

    #[tokio::test]
    async fn register_login_validate_roundtrip() {
        let sessions = manager().await;
        assert_eq!(
            sessions.register("a@b.com", "pw1").await.unwrap(),
            RegisterOutcome::Created
        );

        let token = sessions.login("a@b.com", "pw1", None).await.unwrap();
        assert_eq!(sessions.validate_session(&token).await.unwrap(), "a@b.com");
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let sessions = manager().await;
        sessions.register("a@b.com", "pw1").await.unwrap();
        assert_eq!(
            sessions.register("a@b.com", "pw2").await.unwrap(),
            RegisterOutcome::AlreadyExists
        );
    }

    #[tokio::test]
    async fn blank_fields_are_invalid_input() {
        let sessions = manager().await;
        assert_eq!(
            sessions.register("", "pw1").await.unwrap(),
            RegisterOutcome::InvalidInput
        );
        assert_eq!(
            sessions.register("a@b.com", "  ").await.unwrap(),
            RegisterOutcome::InvalidInput
        );
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_identically() {
        let sessions = manager().await;
        sessions.register("a@b.com", "pw1").await.unwrap();

        let wrong_password = sessions.login("a@b.com", "nope", None).await.unwrap_err();
        let unknown_email = sessions.login("x@y.com", "nope", None).await.unwrap_err();

        assert_eq!(wrong_password.kind, ErrorKind::Authentication);
        assert_eq!(wrong_password.kind, unknown_email.kind);
        assert_eq!(wrong_password.message, unknown_email.message);
    }

    #[tokio::test]
    async fn relogin_rotates_the_presented_token() {
        let sessions = manager().await;
        sessions.register("a@b.com", "pw1").await.unwrap();

        let t1 = sessions.login("a@b.com", "pw1", None).await.unwrap();
        let t2 = sessions.login("a@b.com", "pw1", Some(&t1)).await.unwrap();

        assert_ne!(t1, t2);
        assert!(sessions.validate_session(&t1).await.is_err());
        assert_eq!(sessions.validate_session(&t2).await.unwrap(), "a@b.com");
    }

    #[tokio::test]
    async fn failed_login_without_presented_token_leaves_session_intact() {
        let sessions = manager().await;
        sessions.register("a@b.com", "pw1").await.unwrap();

        let token = sessions.login("a@b.com", "pw1", None).await.unwrap();
        assert!(sessions.login("a@b.com", "wrong", None).await.is_err());

        assert_eq!(sessions.validate_session(&token).await.unwrap(), "a@b.com");
    }

    #[tokio::test]
    async fn failed_login_still_rotates_the_presented_token() {
        // Rotation-before-validation: the presented token dies even though
        // the password check then fails.
        let sessions = manager().await;
        sessions.register("a@b.com", "pw1").await.unwrap();

        let token = sessions.login("a@b.com", "pw1", None).await.unwrap();
        assert!(sessions.login("a@b.com", "wrong", Some(&token)).await.is_err());

        assert!(sessions.validate_session(&token).await.is_err());
    }

    #[tokio::test]
    async fn unknown_email_does_not_rotate_the_presented_token() {
        let sessions = manager().await;
        sessions.register("a@b.com", "pw1").await.unwrap();

        let token = sessions.login("a@b.com", "pw1", None).await.unwrap();
        assert!(sessions.login("x@y.com", "pw1", Some(&token)).await.is_err());

        assert_eq!(sessions.validate_session(&token).await.unwrap(), "a@b.com");
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized_not_a_crash() {
        let sessions = manager().await;
        let err = sessions.validate_session("random-token").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(sessions.find_session("random-token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn signed_but_uncached_token_fails_closed() {
        // A token with a valid signature whose cache entry is gone must be
        // treated as unauthenticated.
        let sessions = manager().await;
        let orphan = sessions.encoder.issue("a@b.com").unwrap();
        let err = sessions.validate_session(&orphan).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }
}
