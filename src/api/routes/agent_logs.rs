//! Agent activity log handler

use axum::extract::State;
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ValidatedQuery};
use crate::domain::agent_log;

#[derive(Debug, Deserialize, Validate)]
pub struct AgentLogsQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = agent_log::MIN_LIMIT, max = agent_log::MAX_LIMIT))]
    pub limit: u32,
}

fn default_limit() -> u32 {
    agent_log::DEFAULT_LIMIT
}

/// GET /logs/agent
pub async fn list_agent_logs(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AgentLogsQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    debug!(limit = query.limit, "Listing agent logs");

    let logs = state
        .agent_log_service
        .recent(query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(logs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_domain_limits() {
        let at = |limit| AgentLogsQuery { limit }.validate();

        assert!(at(agent_log::MIN_LIMIT).is_ok());
        assert!(at(agent_log::MAX_LIMIT).is_ok());
        assert!(at(agent_log::MIN_LIMIT - 1).is_err());
        assert!(at(agent_log::MAX_LIMIT + 1).is_err());
    }
}
