//! Agent log domain - scrolling activity ticker messages

mod generator;
mod templates;

use std::time::Duration;

pub use generator::{AgentLogGenerator, DEFAULT_AGENT_LOG_SEED, LogCategory};
pub use templates::{render, with_thousands};

pub const CACHE_KEY_PREFIX: &str = "demo:logs";
pub const CACHE_TTL: Duration = Duration::from_secs(30);

pub const DEFAULT_LIMIT: u32 = 10;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 20;
