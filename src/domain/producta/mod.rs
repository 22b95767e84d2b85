//! Producta domain - externally driven two-state job flag

mod entity;

use std::time::Duration;

pub use entity::{ProductaState, ProductaStatus};

/// Single global producta; the id segment of the key is left empty
pub const CACHE_KEY_PREFIX: &str = "producta:status";
pub const CACHE_KEY_ID: &str = "";
pub const CACHE_TTL: Duration = Duration::from_secs(600);
