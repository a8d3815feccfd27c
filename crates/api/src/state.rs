//! Shared application state.

use health::HealthService;

/// State shared by all handlers.
///
/// Read-only after construction; handlers receive it as `Arc<AppState<H>>`.
pub struct AppState<H: HealthService> {
    pub health_service: H,
}

impl<H: HealthService> AppState<H> {
    pub fn new(health_service: H) -> Self {
        Self { health_service }
    }
}
