//! Invoice domain - mock invoice feed

mod entity;
mod generator;

use std::ops::RangeInclusive;
use std::time::Duration;

pub use entity::{Invoice, InvoiceStatus};
pub use generator::{
    DEFAULT_INVOICE_SEED, InvoiceGenerator, abbreviate_name, weighted_status,
};

pub const CACHE_KEY_PREFIX: &str = "demo:invoices";
pub const CACHE_TTL: Duration = Duration::from_secs(60);

pub const DEFAULT_LIMIT: u32 = 50;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

pub const AMOUNT_RANGE: RangeInclusive<u32> = 25_000..=250_000;
pub const RISK_RANGE: RangeInclusive<f64> = 0.005..=0.080;

/// Status draw weights, in enumeration order
pub const STATUS_WEIGHTS: &[(InvoiceStatus, f64)] = &[
    (InvoiceStatus::New, 0.6),
    (InvoiceStatus::Processing, 0.3),
    (InvoiceStatus::Funded, 0.1),
];
