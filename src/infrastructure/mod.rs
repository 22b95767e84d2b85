//! Infrastructure layer - cache backends, services, logging and metrics

pub mod cache;
pub mod logging;
pub mod observability;
pub mod services;

pub use logging::init_logging;
