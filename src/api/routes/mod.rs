//! Data endpoints

pub mod agent_logs;
pub mod invoices;
pub mod producta;
pub mod treasury;

use axum::{Router, routing::get};

use super::state::AppState;

/// Create the data router
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(invoices::list_invoices))
        .route("/logs/agent", get(agent_logs::list_agent_logs))
        .route(
            "/producta/status",
            get(producta::get_status).patch(producta::update_status),
        )
        .route("/metrics/treasury", get(treasury::get_treasury_metrics))
}
