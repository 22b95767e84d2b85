//! Deterministic invoice generation
//!
//! Every call to [`InvoiceGenerator::generate`] starts from a fresh RNG
//! seeded with the generator's seed, so the output depends only on
//! `(seed, limit)`. Concurrent callers never share random state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::entity::{Invoice, InvoiceStatus};
use super::{AMOUNT_RANGE, RISK_RANGE, STATUS_WEIGHTS};
use crate::domain::company::company_name;

/// Seed used by the service when none is configured
pub const DEFAULT_INVOICE_SEED: u64 = 1234;

/// Produces synthetic invoices from an isolated seeded random source
#[derive(Debug, Clone, Copy)]
pub struct InvoiceGenerator {
    seed: u64,
}

impl Default for InvoiceGenerator {
    fn default() -> Self {
        Self::with_seed(DEFAULT_INVOICE_SEED)
    }
}

impl InvoiceGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Generates exactly `limit` invoices. The count is not clamped here;
    /// the HTTP layer enforces the allowed range.
    pub fn generate(&self, limit: usize) -> Vec<Invoice> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        (0..limit).map(|_| Self::next_invoice(&mut rng)).collect()
    }

    fn next_invoice(rng: &mut StdRng) -> Invoice {
        let client = company_name(rng);
        let abbreviated = abbreviate_name(&client);

        let number: u16 = rng.gen_range(100..=999);
        let amount = rng.gen_range(AMOUNT_RANGE);
        let risk = round_to(rng.gen_range(RISK_RANGE), 4);
        let token: u16 = rng.gen_range(1000..=9999);
        let status = weighted_status(rng);

        Invoice {
            id: format!("INV-{}-{}", number, abbreviated),
            client,
            amount,
            risk,
            token_id: format!("TIQ-{}", token),
            status,
        }
    }
}

/// Uppercase abbreviation of a client name.
///
/// Multi-word names use the initials of the first four words
/// (`International Business Machines` -> `IBM`); a single word is cut to
/// its first four letters (`Apple` -> `APPL`).
pub fn abbreviate_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(4).collect::<String>().to_uppercase(),
        many => many
            .iter()
            .take(4)
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase(),
    }
}

/// Cumulative-weight draw over [`STATUS_WEIGHTS`]
pub fn weighted_status<R: Rng + ?Sized>(rng: &mut R) -> InvoiceStatus {
    let total: f64 = STATUS_WEIGHTS.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.gen_range(0.0..total);

    for (status, weight) in STATUS_WEIGHTS {
        if roll < *weight {
            return *status;
        }
        roll -= weight;
    }

    // float rounding can leave roll marginally above the last bucket
    STATUS_WEIGHTS[STATUS_WEIGHTS.len() - 1].0
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
