use axum::{Router, http::HeaderValue, middleware::from_fn, routing::get};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::CorsConfig;
use crate::infrastructure::observability::{PrometheusMetrics, create_metrics_router};

use super::health;
use super::middleware::metrics_middleware;
use super::routes;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Data endpoints
        .merge(routes::create_routes())
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Adds the Prometheus exposition route; scrapes are not themselves counted
pub fn with_metrics_route(router: Router, metrics: PrometheusMetrics, path: &str) -> Router {
    router.merge(create_metrics_router(metrics, path))
}

/// Credentials are allowed, so a `*` origin mirrors the caller's origin
/// instead of sending a literal wildcard
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::mirror_request());
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
