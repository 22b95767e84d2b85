//! Domain layer - entities, generators and the cache abstraction

pub mod agent_log;
pub mod cache;
pub mod company;
pub mod error;
pub mod invoice;
pub mod producta;
pub mod treasury;

pub use agent_log::{AgentLogGenerator, LogCategory};
pub use cache::{Cache, CacheExt, CacheKey, CacheLookup};
pub use error::DomainError;
pub use invoice::{Invoice, InvoiceGenerator, InvoiceStatus};
pub use producta::{ProductaState, ProductaStatus};
pub use treasury::TreasuryMetrics;

/// Wall-clock source for generated timestamps, swappable in tests
pub type Clock = fn() -> chrono::DateTime<chrono::Utc>;
