use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of the producta cron job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductaState {
    #[default]
    Processing,
    Done,
}

impl ProductaState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for ProductaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current producta status
///
/// There are no internal transitions; the state only changes when a caller
/// sets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductaStatus {
    pub status: ProductaState,
    #[serde(
        rename = "lastUpdated",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for ProductaStatus {
    fn default() -> Self {
        Self::initial()
    }
}

impl ProductaStatus {
    /// Status reported before anyone has set one
    pub fn initial() -> Self {
        Self {
            status: ProductaState::Processing,
            last_updated: None,
        }
    }

    pub fn updated(status: ProductaState, at: DateTime<Utc>) -> Self {
        Self {
            status,
            last_updated: Some(at),
        }
    }
}
