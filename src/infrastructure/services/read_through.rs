//! Generic get-or-generate flow over the shared cache

use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheExt, CacheKey, CacheLookup};
use crate::infrastructure::observability::record_cache_lookup;

/// Read-through access to the shared cache
///
/// A hit is returned as stored, without touching the TTL. A miss, or an
/// entry that no longer decodes, runs the generator and writes its result
/// back with the domain's TTL.
///
/// Concurrent misses on the same key are not coalesced; each caller
/// generates and writes, and the last write wins.
#[derive(Clone)]
pub struct ReadThroughCache {
    cache: Arc<dyn Cache>,
}

impl ReadThroughCache {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<dyn Cache> {
        &self.cache
    }

    /// Returns the cached value for `key`, generating and storing it on a miss
    pub async fn get_or_generate<T, F>(
        &self,
        domain: &'static str,
        key: &CacheKey,
        ttl: Duration,
        generate: F,
    ) -> Result<T, DomainError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> T + Send,
    {
        let lookup = self.cache.get_json::<T>(key.as_str()).await?;
        record_cache_lookup(domain, lookup.outcome());

        match lookup {
            CacheLookup::Hit(value) => {
                debug!(domain, key = %key, "Cache hit");
                return Ok(value);
            }
            CacheLookup::Miss => debug!(domain, key = %key, "Cache miss, generating"),
            CacheLookup::Malformed(_) => {
                debug!(domain, key = %key, "Regenerating over malformed entry")
            }
        }

        let value = generate();
        self.cache.set_json(key.as_str(), &value, ttl).await?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::{Failure, MockCache, RecordingCache};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TTL: Duration = Duration::from_secs(42);

    fn key() -> CacheKey {
        CacheKey::scoped("test:numbers", 3)
    }

    #[tokio::test]
    async fn test_hit_skips_generator_and_write() {
        let mut mock = MockCache::new();
        mock.expect_get()
            .withf(|key| key.to_string() == "test:numbers:3")
            .times(1)
            .returning(|_| Ok(Some("[7,8,9]".to_string())));
        mock.expect_set().never();

        let store = ReadThroughCache::new(Arc::new(mock));
        let value: Vec<u32> = store
            .get_or_generate("test", &key(), TTL, || panic!("generator must not run on a hit"))
            .await
            .unwrap();

        assert_eq!(value, vec![7, 8, 9]);
    }

    #[tokio::test]
    async fn test_miss_generates_and_writes_once() {
        let mut mock = MockCache::new();
        mock.expect_get().times(1).returning(|_| Ok(None));
        mock.expect_set()
            .withf(|key, value, ttl| {
                key.to_string() == "test:numbers:3" && value.to_string() == "[1,2,3]" && *ttl == TTL
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let store = ReadThroughCache::new(Arc::new(mock));
        let calls = AtomicUsize::new(0);
        let value: Vec<u32> = store
            .get_or_generate("test", &key(), TTL, || {
                calls.fetch_add(1, Ordering::SeqCst);
                vec![1, 2, 3]
            })
            .await
            .unwrap();

        assert_eq!(value, vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_entry_is_regenerated() {
        let cache = Arc::new(RecordingCache::new().with_raw_entry("test:numbers:3", "{not json"));
        let store = ReadThroughCache::new(cache.clone());

        let value: Vec<u32> = store
            .get_or_generate("test", &key(), TTL, || vec![4, 5])
            .await
            .unwrap();

        assert_eq!(value, vec![4, 5]);
        assert_eq!(cache.writes().len(), 1);
        assert_eq!(cache.raw("test:numbers:3").as_deref(), Some("[4,5]"));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_regenerated() {
        let cache = Arc::new(RecordingCache::new().with_raw_entry("test:numbers:3", r#"{"a":1}"#));
        let store = ReadThroughCache::new(cache.clone());

        let value: Vec<u32> = store
            .get_or_generate("test", &key(), TTL, || vec![6])
            .await
            .unwrap();

        assert_eq!(value, vec![6]);
    }

    #[tokio::test]
    async fn test_empty_list_is_a_hit() {
        let cache = Arc::new(RecordingCache::new().with_raw_entry("test:numbers:3", "[]"));
        let store = ReadThroughCache::new(cache.clone());

        let value: Vec<u32> = store
            .get_or_generate("test", &key(), TTL, || vec![1])
            .await
            .unwrap();

        assert!(value.is_empty());
        assert!(cache.writes().is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_propagates_without_generating() {
        let cache = Arc::new(RecordingCache::new().with_failure(Failure::Connection));
        let store = ReadThroughCache::new(cache);

        let result: Result<Vec<u32>, _> = store
            .get_or_generate("test", &key(), TTL, || panic!("generator must not run"))
            .await;

        assert!(matches!(result, Err(DomainError::CacheConnection { .. })));
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let mut mock = MockCache::new();
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_set()
            .returning(|_, _, _| Err(DomainError::cache_operation("READONLY")));

        let store = ReadThroughCache::new(Arc::new(mock));
        let result: Result<Vec<u32>, _> = store
            .get_or_generate("test", &key(), TTL, || vec![1])
            .await;

        assert!(matches!(result, Err(DomainError::CacheOperation { .. })));
    }

    #[tokio::test]
    async fn test_consecutive_reads_are_identical() {
        let cache = Arc::new(RecordingCache::new());
        let store = ReadThroughCache::new(cache.clone());
        let counter = AtomicUsize::new(0);

        let first: usize = store
            .get_or_generate("test", &key(), TTL, || counter.fetch_add(1, Ordering::SeqCst) + 100)
            .await
            .unwrap();
        let second: usize = store
            .get_or_generate("test", &key(), TTL, || counter.fetch_add(1, Ordering::SeqCst) + 100)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(cache.writes().len(), 1);
    }
}
