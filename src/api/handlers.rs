//! HTTP API handlers.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::{debug, error};

use crate::manifest::ManifestDocument;
use crate::metrics;

/// Content type of `/manifest.json` responses.
const MANIFEST_CONTENT_TYPE: &str = "application/json";

/// Content type of the Prometheus text exposition format.
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Prometheus handle, absent when metrics are disabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state without metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a Prometheus handle for `/metrics`.
    pub fn with_metrics(handle: PrometheusHandle) -> Self {
        Self {
            metrics: Some(handle),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Value of the first `name` pair, or the empty string.
fn name_param(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Manifest handler - returns 200 with the manifest document.
///
/// Query pairs are taken raw so a repeated `name` resolves to its first value
/// instead of rejecting the request.
pub async fn manifest(Query(params): Query<Vec<(String, String)>>) -> Response {
    let timer = metrics::timer_http("/manifest.json");

    let name = name_param(params);
    let document = ManifestDocument::new(name);

    match document.to_json() {
        Ok(body) => {
            metrics::inc_manifest_requests();
            debug!(name = %document.name, elapsed_ms = timer.elapsed_ms(), "serving manifest");
            ([(header::CONTENT_TYPE, MANIFEST_CONTENT_TYPE)], body).into_response()
        }
        // Only reachable if serde_json itself fails on plain strings.
        Err(e) => {
            error!("Failed to serialize manifest: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Metrics handler - renders Prometheus text, 404 when metrics are disabled.
pub async fn render_metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "metrics disabled").into_response(),
    }
}
