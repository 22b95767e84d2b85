//! Cache factory for runtime selection

use std::sync::Arc;

use serde::Deserialize;

use crate::config::{CacheSettings, RedisSettings, TlsCertReqs};
use crate::domain::DomainError;
use crate::domain::cache::Cache;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Supported cache types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheType {
    /// Redis (or any Redis-protocol store)
    #[default]
    Redis,
    /// Process-local cache using moka
    InMemory,
}

impl std::fmt::Display for CacheType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheType::InMemory => write!(f, "in_memory"),
            CacheType::Redis => write!(f, "redis"),
        }
    }
}

impl From<&RedisSettings> for RedisCacheConfig {
    fn from(settings: &RedisSettings) -> Self {
        let mut config = RedisCacheConfig::new(settings.host.clone(), settings.port)
            .with_db(settings.db)
            .with_credentials(settings.username.clone(), settings.password.clone())
            .with_connection_timeout(settings.connect_timeout())
            .with_operation_timeout(settings.operation_timeout());

        if settings.tls_enabled {
            config = config.with_tls(settings.tls_cert_reqs != TlsCertReqs::Required);
        }

        config
    }
}

/// Factory for creating cache instances
#[derive(Debug, Default)]
pub struct CacheFactory;

impl CacheFactory {
    /// Creates the configured backend
    ///
    /// Never connects: a Redis backend that is down only fails once a
    /// request reaches it.
    pub fn create(settings: &CacheSettings) -> Result<Arc<dyn Cache>, DomainError> {
        match settings.provider {
            CacheType::InMemory => {
                let mut config =
                    InMemoryCacheConfig::default().with_max_capacity(settings.in_memory.max_capacity);

                if let Some(prefix) = &settings.key_prefix {
                    config = config.with_key_prefix(prefix.clone());
                }

                Ok(Arc::new(InMemoryCache::with_config(config)))
            }
            CacheType::Redis => {
                let mut config = RedisCacheConfig::from(&settings.redis);

                if let Some(prefix) = &settings.key_prefix {
                    config = config.with_key_prefix(prefix.clone());
                }

                Ok(Arc::new(RedisCache::new(config)?))
            }
        }
    }
}
