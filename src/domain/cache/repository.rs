//! Cache trait definition

use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Key-value store with per-entry TTL
///
/// Values are JSON strings so the trait stays dyn-compatible; use
/// [`CacheExt`] for typed access. Expiry is owned by the backend, callers
/// never track it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Cache: Send + Sync {
    /// Reads a raw value. An absent key is `Ok(None)`, never an error.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Writes a raw value that expires `ttl` after the write
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Round-trips to the backend to verify it is reachable
    async fn ping(&self) -> Result<(), DomainError>;

    /// Short backend name used in logs and health output
    fn backend(&self) -> &'static str;
}

/// Result of a typed cache read
///
/// `Malformed` keeps the decode failure so callers can log it, but for
/// retrieval purposes it means the same as `Miss`.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<T> {
    Hit(T),
    Miss,
    Malformed(String),
}

impl<T> CacheLookup<T> {
    /// Label used for lookup metrics
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Hit(_) => "hit",
            Self::Miss => "miss",
            Self::Malformed(_) => "malformed",
        }
    }
}

/// Extension trait providing JSON-typed get/set operations
pub trait CacheExt: Cache {
    /// Reads and decodes a JSON value
    ///
    /// Store failures propagate; a payload that does not decode into `V`
    /// comes back as [`CacheLookup::Malformed`].
    fn get_json<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<CacheLookup<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get(key).await? {
                Some(data) => match serde_json::from_str::<V>(&data) {
                    Ok(value) => Ok(CacheLookup::Hit(value)),
                    Err(e) => {
                        warn!(key, error = %e, "Failed to decode JSON from cache");
                        Ok(CacheLookup::Malformed(e.to_string()))
                    }
                },
                None => Ok(CacheLookup::Miss),
            }
        }
    }

    /// Encodes a value as JSON and writes it with a TTL
    fn set_json<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        ttl: Duration,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync + ?Sized,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|e| {
                DomainError::cache_operation(format!(
                    "Failed to encode value for key '{}': {}",
                    key, e
                ))
            })?;
            self.set(key, &data, ttl).await
        }
    }
}

// Blanket implementation for all types implementing Cache
impl<T: Cache + ?Sized> CacheExt for T {}


#[cfg(test)]
mod tests {
    use super::recording::{Failure, RecordingCache};
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_get_returns_raw_value() {
        let cache = RecordingCache::new().with_raw_entry("test_key", "test_value");

        let result = cache.get("test_key").await.unwrap();
        assert_eq!(result, Some("test_value".to_string()));
    }

    #[tokio::test]
    async fn test_get_failure_propagates() {
        let cache = RecordingCache::new().with_failure(Failure::Operation);

        let result = cache.get("test_key").await;
        assert!(matches!(result, Err(DomainError::CacheOperation { .. })));
    }

    #[tokio::test]
    async fn test_get_json_hit() {
        let cache = RecordingCache::new().with_raw_entry("test_key", r#"{"key":"value"}"#);

        let result: CacheLookup<BTreeMap<String, String>> =
            cache.get_json("test_key").await.unwrap();

        let mut expected = BTreeMap::new();
        expected.insert("key".to_string(), "value".to_string());
        assert_eq!(result, CacheLookup::Hit(expected));
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let cache = RecordingCache::new();

        let result: CacheLookup<Vec<String>> = cache.get_json("test_key").await.unwrap();
        assert_eq!(result, CacheLookup::Miss);
        assert_eq!(cache.reads(), 1);
    }

    #[tokio::test]
    async fn test_get_json_invalid_json_is_malformed() {
        let cache = RecordingCache::new().with_raw_entry("test_key", "invalid json");

        let result: CacheLookup<Vec<String>> = cache.get_json("test_key").await.unwrap();
        assert!(matches!(result, CacheLookup::Malformed(_)));
    }

    #[tokio::test]
    async fn test_get_json_wrong_shape_is_malformed() {
        let cache = RecordingCache::new().with_raw_entry("test_key", r#"{"tvl":"lots"}"#);

        let result: CacheLookup<Vec<u32>> = cache.get_json("test_key").await.unwrap();
        assert_eq!(result.outcome(), "malformed");
    }

    #[tokio::test]
    async fn test_get_json_store_error_is_not_swallowed() {
        let cache = RecordingCache::new().with_failure(Failure::Connection);

        let result: Result<CacheLookup<Vec<String>>, _> = cache.get_json("test_key").await;
        assert!(matches!(result, Err(DomainError::CacheConnection { .. })));
    }

    #[tokio::test]
    async fn test_set_json_writes_encoded_value() {
        let cache = RecordingCache::new();
        let mut data = BTreeMap::new();
        data.insert("key", "value");

        cache
            .set_json("test_key", &data, Duration::from_secs(60))
            .await
            .unwrap();

        let writes = cache.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].key, "test_key");
        assert_eq!(writes[0].value, r#"{"key":"value"}"#);
        assert_eq!(writes[0].ttl, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_set_json_failure() {
        let cache = RecordingCache::new().with_failure(Failure::Operation);

        let result = cache
            .set_json("test_key", &vec!["a"], Duration::from_secs(60))
            .await;
        assert!(matches!(result, Err(DomainError::CacheOperation { .. })));
    }

    #[tokio::test]
    async fn test_set_json_unserializable_value() {
        // JSON object keys must be strings
        let cache = RecordingCache::new();
        let mut data: BTreeMap<Vec<u8>, u8> = BTreeMap::new();
        data.insert(vec![1, 2], 3);

        let result = cache
            .set_json("test_key", &data, Duration::from_secs(60))
            .await;

        assert!(matches!(result, Err(DomainError::CacheOperation { .. })));
        assert!(cache.writes().is_empty());
    }

    #[test]
    fn test_lookup_outcome_labels() {
        assert_eq!(CacheLookup::Hit(3).outcome(), "hit");
        assert_eq!(CacheLookup::<u8>::Miss.outcome(), "miss");
        assert_eq!(
            CacheLookup::<u8>::Malformed("eof".to_string()).outcome(),
            "malformed"
        );
    }

    #[tokio::test]
    async fn test_mock_cache_get_json_delegates_to_get() {
        let mut mock = MockCache::new();
        mock.expect_get()
            .withf(|key| key.to_string() == "demo:logs:3")
            .times(1)
            .returning(|_| Ok(Some(r#"["a","b","c"]"#.to_string())));

        let result: CacheLookup<Vec<String>> = mock.get_json("demo:logs:3").await.unwrap();
        assert_eq!(
            result,
            CacheLookup::Hit(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }
}
