//! Producta status flag, persisted only in the cache

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::DomainError;
use crate::domain::Clock;
use crate::domain::cache::{Cache, CacheExt, CacheKey};
use crate::domain::producta::{self, ProductaState, ProductaStatus};

use super::read_through::ReadThroughCache;

pub struct ProductaService {
    store: ReadThroughCache,
    clock: Clock,
}

impl ProductaService {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self {
            store: ReadThroughCache::new(cache),
            clock: Utc::now,
        }
    }

    /// Replaces the clock used to stamp updates
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn key() -> CacheKey {
        CacheKey::scoped(producta::CACHE_KEY_PREFIX, producta::CACHE_KEY_ID)
    }

    /// Current status; the first read with nothing stored writes `processing`
    pub async fn get_status(&self) -> Result<ProductaStatus, DomainError> {
        self.store
            .get_or_generate(
                "producta",
                &Self::key(),
                producta::CACHE_TTL,
                ProductaStatus::initial,
            )
            .await
    }

    /// Sets the status and restarts its TTL
    pub async fn update_status(&self, state: ProductaState) -> Result<ProductaStatus, DomainError> {
        let status = ProductaStatus::updated(state, (self.clock)());

        self.store
            .cache()
            .set_json(Self::key().as_str(), &status, producta::CACHE_TTL)
            .await?;

        info!(status = %state, "Producta status updated");

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::{Failure, MockCache, RecordingCache};
    use chrono::{DateTime, TimeZone};
    use std::time::Duration;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[tokio::test]
    async fn test_first_read_writes_processing() {
        let cache = Arc::new(RecordingCache::new());
        let service = ProductaService::new(cache.clone());

        let status = service.get_status().await.unwrap();
        assert_eq!(status, ProductaStatus::initial());

        let writes = cache.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].key, "producta:status:");
        assert_eq!(writes[0].value, r#"{"status":"processing"}"#);
        assert_eq!(writes[0].ttl, Duration::from_secs(600));
    }

    #[tokio::test]
    async fn test_update_then_read() {
        let cache = Arc::new(RecordingCache::new());
        let service = ProductaService::new(cache.clone()).with_clock(fixed_clock);

        let updated = service.update_status(ProductaState::Done).await.unwrap();
        assert_eq!(updated.status, ProductaState::Done);
        assert_eq!(updated.last_updated, Some(fixed_clock()));

        let read = service.get_status().await.unwrap();
        assert_eq!(read, updated);
        assert_eq!(cache.writes().len(), 1);
    }

    #[tokio::test]
    async fn test_update_writes_key_and_ttl() {
        let mut mock = MockCache::new();
        mock.expect_set()
            .withf(|key, value, ttl| {
                key.to_string() == "producta:status:"
                    && value.contains(r#""status":"processing""#)
                    && value.contains(r#""lastUpdated":"2025-03-14T09:26:53Z""#)
                    && *ttl == Duration::from_secs(600)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        mock.expect_get().never();

        let service = ProductaService::new(Arc::new(mock)).with_clock(fixed_clock);
        service.update_status(ProductaState::Processing).await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_status_falls_back_to_processing() {
        let cache = Arc::new(RecordingCache::new().with_raw_entry("producta:status:", "done"));
        let service = ProductaService::new(cache.clone());

        let status = service.get_status().await.unwrap();
        assert_eq!(status.status, ProductaState::Processing);
        assert_eq!(cache.writes().len(), 1);
    }

    #[tokio::test]
    async fn test_update_failure_propagates() {
        let cache = Arc::new(RecordingCache::new().with_failure(Failure::Connection));
        let service = ProductaService::new(cache);

        let result = service.update_status(ProductaState::Done).await;
        assert!(matches!(result, Err(DomainError::CacheConnection { .. })));
    }
}
