//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::MetricsConfig;
use crate::domain::DomainError;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics in Prometheus text exposition format
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
///
/// Returns `None` when disabled or when a global recorder is already
/// installed; the service keeps running either way.
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("mint_server_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router serving the exposition at `path`
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record the outcome of a read-through lookup (`hit`, `miss`, `malformed`)
pub fn record_cache_lookup(domain: &'static str, outcome: &'static str) {
    counter!("cache_lookups_total", "domain" => domain, "outcome" => outcome).increment(1);
}

/// Record a failed store command
pub fn record_cache_error(operation: &'static str, error: &DomainError) {
    counter!(
        "cache_errors_total",
        "operation" => operation,
        "kind" => error_kind(error)
    )
    .increment(1);
}

fn error_kind(error: &DomainError) -> &'static str {
    match error {
        DomainError::CacheConnection { .. } => "connection",
        DomainError::CacheOperation { .. } => "operation",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_metrics_return_none() {
        let config = MetricsConfig {
            enabled: false,
            path: "/internal/metrics".to_string(),
        };

        assert!(init_metrics(&config).is_none());
    }

    #[test]
    fn test_error_kind_labels() {
        assert_eq!(
            error_kind(&DomainError::cache_connection("down")),
            "connection"
        );
        assert_eq!(error_kind(&DomainError::cache_operation("WRONGTYPE")), "operation");
        assert_eq!(error_kind(&DomainError::configuration("bad url")), "other");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_http_request("GET", "/invoices", 200, Duration::from_millis(3));
        record_cache_lookup("invoices", "hit");
        record_cache_error("get", &DomainError::cache_connection("down"));
    }
}
