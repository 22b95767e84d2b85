//! Treasury domain - TVL and APY metrics

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CACHE_KEY: &str = "treasury:metrics";
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Treasury metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreasuryMetrics {
    /// Total value locked
    pub tvl: f64,
    /// Annual percentage yield
    pub apy: f64,
}

impl TreasuryMetrics {
    /// Fixed figures served until a real source exists
    pub const fn current() -> Self {
        Self {
            tvl: 1_480_000.0,
            apy: 9.2,
        }
    }
}
