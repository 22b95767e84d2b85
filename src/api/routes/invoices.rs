//! Invoice feed handler

use axum::extract::State;
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ValidatedQuery};
use crate::domain::invoice::{self, Invoice};

#[derive(Debug, Deserialize, Validate)]
pub struct InvoicesQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = invoice::MIN_LIMIT, max = invoice::MAX_LIMIT))]
    pub limit: u32,
}

fn default_limit() -> u32 {
    invoice::DEFAULT_LIMIT
}

/// GET /invoices
pub async fn list_invoices(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<InvoicesQuery>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    debug!(limit = query.limit, "Listing invoices");

    let invoices = state
        .invoice_service
        .list(query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(invoices))
}
