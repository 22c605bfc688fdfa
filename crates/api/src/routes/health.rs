use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the platform answered the probe.
    pub platform_healthy: bool,
}

/// GET /health -- returns service and platform health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let platform_healthy = avolve_db::health_check(state.platform.as_ref())
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Platform health probe failed"))
        .is_ok();

    let status = if platform_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        platform_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
