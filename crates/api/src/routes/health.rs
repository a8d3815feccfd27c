//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use health::{HealthResponse, HealthService};

use crate::state::AppState;

/// GET /health-check — returns the injected service's health report.
pub async fn check<H: HealthService>(
    State(state): State<Arc<AppState<H>>>,
) -> Json<HealthResponse> {
    let response = state.health_service.check();

    metrics::counter!("health_checks_total").increment(1);
    tracing::debug!(
        status = %response.status,
        uptime_seconds = response.uptime_seconds,
        "health check"
    );

    Json(response)
}
