//! Cached agent activity log

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::agent_log::{self, AgentLogGenerator};
use crate::domain::cache::{Cache, CacheKey};

use super::read_through::ReadThroughCache;

pub struct AgentLogService {
    store: ReadThroughCache,
    generator: AgentLogGenerator,
}

impl AgentLogService {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self::with_generator(cache, AgentLogGenerator::default())
    }

    pub fn with_generator(cache: Arc<dyn Cache>, generator: AgentLogGenerator) -> Self {
        Self {
            store: ReadThroughCache::new(cache),
            generator,
        }
    }

    /// Returns up to `limit` log lines, cached for 30 seconds per distinct
    /// limit. The generator caps the count at the log maximum.
    pub async fn recent(&self, limit: u32) -> Result<Vec<String>, DomainError> {
        let key = CacheKey::scoped(agent_log::CACHE_KEY_PREFIX, limit);

        self.store
            .get_or_generate("logs", &key, agent_log::CACHE_TTL, || {
                self.generator.generate(limit as usize)
            })
            .await
    }
}
