//! HTTP server for the health-check scaffold.
//!
//! Serves the health report produced by an injected `HealthService`, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use health::{HealthService, ProcessHealthService};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use state::AppState;

/// Path of the health-check route, relative to the base path.
pub const HEALTH_CHECK_PATH: &str = "/health-check";

/// Creates the Axum application router with all routes and shared state.
///
/// `base_path` must be empty or already normalized (see
/// [`config::normalize_base_path`]); when non-empty every route is mounted
/// beneath it.
pub fn create_app<H: HealthService + 'static>(
    state: Arc<AppState<H>>,
    metrics_handle: PrometheusHandle,
    base_path: &str,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let health_router = Router::new()
        .route(HEALTH_CHECK_PATH, get(routes::health::check::<H>))
        .with_state(state)
        .merge(metrics_router);

    let app = if base_path.is_empty() {
        health_router
    } else {
        Router::new().nest(base_path, health_router)
    };

    app.fallback(routes::fallback)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by a [`ProcessHealthService`].
pub fn create_default_state(config: &Config) -> Arc<AppState<ProcessHealthService>> {
    let service = ProcessHealthService::new(config.service_name.clone())
        .with_version(env!("CARGO_PKG_VERSION"));
    Arc::new(AppState::new(service))
}
