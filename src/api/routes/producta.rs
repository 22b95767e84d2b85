//! Producta status handlers

use axum::extract::State;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{ProductaState, ProductaStatus};

/// Body of `PATCH /producta/status`
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ProductaState,
}

/// GET /producta/status
pub async fn get_status(State(state): State<AppState>) -> Result<Json<ProductaStatus>, ApiError> {
    let status = state
        .producta_service
        .get_status()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(status))
}

/// PATCH /producta/status
pub async fn update_status(
    State(state): State<AppState>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ProductaStatus>, ApiError> {
    let status = state
        .producta_service
        .update_status(request.status)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(status))
}
