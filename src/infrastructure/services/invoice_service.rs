//! Cached invoice feed

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheKey};
use crate::domain::invoice::{self, Invoice, InvoiceGenerator};

use super::read_through::ReadThroughCache;

pub struct InvoiceService {
    store: ReadThroughCache,
    generator: InvoiceGenerator,
}

impl InvoiceService {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self::with_generator(cache, InvoiceGenerator::default())
    }

    pub fn with_generator(cache: Arc<dyn Cache>, generator: InvoiceGenerator) -> Self {
        Self {
            store: ReadThroughCache::new(cache),
            generator,
        }
    }

    /// Returns `limit` invoices, cached for a minute per distinct limit
    ///
    /// `limit` is expected to be within bounds already; it is not clamped.
    pub async fn list(&self, limit: u32) -> Result<Vec<Invoice>, DomainError> {
        let key = CacheKey::scoped(invoice::CACHE_KEY_PREFIX, limit);

        self.store
            .get_or_generate("invoices", &key, invoice::CACHE_TTL, || {
                self.generator.generate(limit as usize)
            })
            .await
    }
}
