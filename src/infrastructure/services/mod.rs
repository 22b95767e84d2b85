//! Infrastructure services

mod agent_log_service;
mod invoice_service;
mod producta_service;
mod read_through;
mod treasury_service;

pub use agent_log_service::AgentLogService;
pub use invoice_service::InvoiceService;
pub use producta_service::ProductaService;
pub use read_through::ReadThroughCache;
pub use treasury_service::TreasuryService;
