//! Cached treasury metrics

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheKey};
use crate::domain::treasury::{self, TreasuryMetrics};

use super::read_through::ReadThroughCache;

pub struct TreasuryService {
    store: ReadThroughCache,
}

impl TreasuryService {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self {
            store: ReadThroughCache::new(cache),
        }
    }

    pub async fn metrics(&self) -> Result<TreasuryMetrics, DomainError> {
        self.store
            .get_or_generate(
                "treasury",
                &CacheKey::fixed(treasury::CACHE_KEY),
                treasury::CACHE_TTL,
                TreasuryMetrics::current,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::RecordingCache;
    use std::time::Duration;

    #[tokio::test]
    async fn test_miss_stores_current_metrics_for_an_hour() {
        let cache = Arc::new(RecordingCache::new());
        let metrics = TreasuryService::new(cache.clone()).metrics().await.unwrap();

        assert_eq!(metrics, TreasuryMetrics::current());

        let writes = cache.writes();
        assert_eq!(writes[0].key, "treasury:metrics");
        assert_eq!(writes[0].ttl, Duration::from_secs(3600));
    }

    #[tokio::test]
    async fn test_hit_returns_stored_figures() {
        let stored = TreasuryMetrics {
            tvl: 2_000_000.0,
            apy: 7.5,
        };
        let cache = Arc::new(RecordingCache::new().with_entry("treasury:metrics", &stored));

        let metrics = TreasuryService::new(cache.clone()).metrics().await.unwrap();

        assert_eq!(metrics, stored);
        assert!(cache.writes().is_empty());
    }
}
