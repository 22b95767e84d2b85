//! Application state for shared services

use std::sync::Arc;

use crate::domain::cache::Cache;
use crate::infrastructure::services::{
    AgentLogService, InvoiceService, ProductaService, TreasuryService,
};

/// Services shared by every handler
///
/// All services hold the same cache client, so the process keeps a single
/// connection to the store.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn Cache>,
    pub invoice_service: Arc<InvoiceService>,
    pub agent_log_service: Arc<AgentLogService>,
    pub producta_service: Arc<ProductaService>,
    pub treasury_service: Arc<TreasuryService>,
}

impl AppState {
    /// Builds every service over the given cache with default generators
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self {
            invoice_service: Arc::new(InvoiceService::new(cache.clone())),
            agent_log_service: Arc::new(AgentLogService::new(cache.clone())),
            producta_service: Arc::new(ProductaService::new(cache.clone())),
            treasury_service: Arc::new(TreasuryService::new(cache.clone())),
            cache,
        }
    }
}
