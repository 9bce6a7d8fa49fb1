//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use gallery_core::config::cache::MemoryCacheConfig;
use gallery_core::result::AppResult;
use gallery_core::traits::cache::CacheProvider;

/// A cached value together with its own TTL.
///
/// Sliding session expiration rewrites entries on every hit, so the TTL
/// must restart per write rather than being fixed at cache construction.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Per-entry expiration policy: every insert or overwrite restarts the
/// entry's own TTL.
struct EntryExpiry;

impl Expiry<String, Entry> for EntryExpiry {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-memory cache provider using moka.
#[derive(Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, Entry>,
    /// Default TTL for entries.
    default_ttl: Duration,
}

impl std::fmt::Debug for MemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheProvider")
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig, default_ttl_seconds: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryExpiry)
            .build();

        Self {
            cache,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.cache
            .insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    ttl,
                },
            )
            .await;
        Ok(())
    }

    async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, value, self.default_ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_provider() -> MemoryCacheProvider {
        let config = MemoryCacheConfig { max_capacity: 1000 };
        MemoryCacheProvider::new(&config, 60)
    }

    #[tokio::test]
    async fn test_set_get() {
        let provider = make_provider();
        provider
            .set("key", "value", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(provider.get("key").await.unwrap(), Some("value".into()));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let provider = make_provider();
        assert_eq!(provider.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete() {
        let provider = make_provider();
        provider
            .set("key", "value", Duration::from_secs(60))
            .await
            .unwrap();
        provider.delete("key").await.unwrap();
        assert_eq!(provider.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_gone() {
        let provider = make_provider();
        provider
            .set("short", "value", Duration::from_millis(20))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(provider.get("short").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rewrite_restarts_ttl() {
        let provider = make_provider();
        provider
            .set("sliding", "v1", Duration::from_millis(80))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        provider
            .set("sliding", "v1", Duration::from_millis(80))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        // Original TTL would have elapsed; the rewrite kept it alive.
        assert_eq!(provider.get("sliding").await.unwrap(), Some("v1".into()));
    }

    #[tokio::test]
    async fn test_json_roundtrip() {
        let provider = make_provider();
        let data = serde_json::json!({"name": "test", "count": 42});
        provider
            .set_json("json_key", &data, Duration::from_secs(60))
            .await
            .unwrap();
        let result: Option<serde_json::Value> = provider.get_json("json_key").await.unwrap();
        assert_eq!(result, Some(data));
    }

    #[tokio::test]
    async fn test_health_check() {
        let provider = make_provider();
        assert!(provider.health_check().await.unwrap());
    }
}
