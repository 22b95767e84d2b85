use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::MAX_LIMIT;
use super::templates::{
    FUNDING_TEMPLATES, INVOICE_TEMPLATES, RISK_TEMPLATES, SYSTEM_TEMPLATES, render,
    with_thousands,
};
use crate::domain::Clock;
use crate::domain::company::company_name;

pub const DEFAULT_AGENT_LOG_SEED: u64 = 4321;

/// Log message family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Invoice,
    Risk,
    Funding,
    System,
}

impl LogCategory {
    pub const ALL: [LogCategory; 4] = [
        LogCategory::Invoice,
        LogCategory::Risk,
        LogCategory::Funding,
        LogCategory::System,
    ];

    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::Invoice => INVOICE_TEMPLATES,
            Self::Risk => RISK_TEMPLATES,
            Self::Funding => FUNDING_TEMPLATES,
            Self::System => SYSTEM_TEMPLATES,
        }
    }
}

/// Produces agent activity messages from an isolated seeded random source.
///
/// Output is a pure function of `(seed, limit)` except for the heartbeat
/// timestamp, which reads the configured clock.
#[derive(Debug, Clone, Copy)]
pub struct AgentLogGenerator {
    seed: u64,
    clock: Clock,
}

impl Default for AgentLogGenerator {
    fn default() -> Self {
        Self::with_seed(DEFAULT_AGENT_LOG_SEED)
    }
}

impl AgentLogGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            clock: Utc::now,
        }
    }

    /// Replaces the wall clock, mainly so tests can pin timestamps
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Generates up to `limit` messages; counts above the maximum are
    /// silently clamped.
    pub fn generate(&self, limit: usize) -> Vec<String> {
        let limit = limit.min(MAX_LIMIT as usize);
        let mut rng = StdRng::seed_from_u64(self.seed);

        (0..limit)
            .map(|_| {
                let category = LogCategory::ALL[rng.gen_range(0..LogCategory::ALL.len())];
                self.message(category, &mut rng)
            })
            .collect()
    }

    fn message(&self, category: LogCategory, rng: &mut StdRng) -> String {
        let pool = category.templates();
        let template = pool[rng.gen_range(0..pool.len())];

        // every field is drawn regardless of which template was picked so the
        // sequence consumed per message is fixed for a category
        let values = match category {
            LogCategory::Invoice => vec![
                ("invoice_id", rng.gen_range(1000..=9999u32).to_string()),
                ("company", company_name(rng)),
                ("batch_id", rng.gen_range(1..=100u32).to_string()),
            ],
            LogCategory::Risk => vec![
                ("risk_score", round_to(rng.gen_range(0.01..=0.99), 2).to_string()),
                ("invoice_id", rng.gen_range(1000..=9999u32).to_string()),
                ("batch_id", rng.gen_range(1..=100u32).to_string()),
                ("count", rng.gen_range(10..=500u32).to_string()),
            ],
            LogCategory::Funding => vec![
                ("batch_id", rng.gen_range(1..=100u32).to_string()),
                ("invoice_id", rng.gen_range(1000..=9999u32).to_string()),
                ("amount", with_thousands(rng.gen_range(100_000..=10_000_000u64))),
                ("rate", format!("{:.1}", rng.gen_range(1.0..=15.0f64))),
            ],
            LogCategory::System => vec![
                (
                    "timestamp",
                    (self.clock)()
                        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                        .to_string(),
                ),
                ("count", rng.gen_range(100..=10_000u32).to_string()),
                ("time", rng.gen_range(5..=200u32).to_string()),
                (
                    "status",
                    (if rng.gen_bool(0.5) { "green" } else { "yellow" }).to_string(),
                ),
            ],
        };

        render(template, &values)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
