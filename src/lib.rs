//! Mint demo API
//!
//! Serves deterministic mock data (invoices, agent activity logs, treasury
//! metrics and a job status flag) through a read-through cache with
//! per-domain TTLs. Redis is the production backend; an in-process moka
//! cache covers local runs.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use tracing::{info, warn};

use api::state::AppState;
use infrastructure::cache::CacheFactory;

/// Builds the shared state from configuration
///
/// Probes the cache once; an unreachable store is logged and startup
/// continues, since requests will reconnect on their own.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let cache = CacheFactory::create(&config.cache)?;

    info!(
        backend = cache.backend(),
        provider = %config.cache.provider,
        "Cache initialized"
    );

    match cache.ping().await {
        Ok(()) => info!(backend = cache.backend(), "Cache reachable"),
        Err(e) => warn!(
            backend = cache.backend(),
            error = %e,
            "Cache unreachable at startup, continuing"
        ),
    }

    Ok(AppState::new(cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::CacheType;

    #[tokio::test]
    async fn test_create_app_state_in_memory() {
        let mut config = AppConfig::default();
        config.cache.provider = CacheType::InMemory;

        let state = create_app_state(&config).await.unwrap();
        assert_eq!(state.cache.backend(), "in_memory");
    }

    #[tokio::test]
    async fn test_startup_survives_unreachable_redis() {
        let mut config = AppConfig::default();
        config.cache.redis.port = 1;
        config.cache.redis.connect_timeout_secs = 1;

        let state = create_app_state(&config).await.unwrap();
        assert_eq!(state.cache.backend(), "redis");
    }
}
