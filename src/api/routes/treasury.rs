use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::TreasuryMetrics;

/// GET /metrics/treasury
pub async fn get_treasury_metrics(
    State(state): State<AppState>,
) -> Result<Json<TreasuryMetrics>, ApiError> {
    let metrics = state
        .treasury_service
        .metrics()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(metrics))
}
