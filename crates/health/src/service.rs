//! Health service trait and process-level implementation.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::response::{HealthResponse, HealthStatus, InstanceId};

/// Trait for producing health reports.
///
/// Implementations must not fail and must not have side effects; the HTTP
/// layer calls `check` once per request.
pub trait HealthService: Send + Sync {
    /// Produces a fresh health report.
    fn check(&self) -> HealthResponse;
}

impl<T: HealthService + ?Sized> HealthService for Arc<T> {
    fn check(&self) -> HealthResponse {
        (**self).check()
    }
}

/// Health service reporting on the running process.
///
/// Captures the start instant and a random instance ID at construction, so
/// every report from the same service shares status, name, version and
/// instance ID while uptime and timestamp advance.
#[derive(Debug, Clone)]
pub struct ProcessHealthService {
    name: String,
    version: String,
    instance_id: InstanceId,
    started_at: Instant,
}

impl ProcessHealthService {
    /// Creates a service reporting under the given name and this crate's version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instance_id: InstanceId::new(),
            started_at: Instant::now(),
        }
    }

    /// Overrides the reported version, typically with the binary's own.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Returns the reported service name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the reported version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the ID of this instance.
    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }
}

impl HealthService for ProcessHealthService {
    fn check(&self) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Ok,
            service: self.name.clone(),
            version: self.version.clone(),
            instance_id: self.instance_id,
            uptime_seconds: self.started_at.elapsed().as_secs(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_ok() {
        let service = ProcessHealthService::new("server-template");
        let response = service.check();

        assert_eq!(response.status, HealthStatus::Ok);
        assert!(!response.status.as_str().is_empty());
        assert_eq!(response.service, "server-template");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.instance_id, service.instance_id());
    }

    #[test]
    fn repeated_checks_are_structurally_equivalent() {
        let service = ProcessHealthService::new("server-template");
        let first = service.check();
        let second = service.check();

        assert_eq!(first.status, second.status);
        assert_eq!(first.service, second.service);
        assert_eq!(first.version, second.version);
        assert_eq!(first.instance_id, second.instance_id);
        assert!(second.uptime_seconds >= first.uptime_seconds);
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn fresh_service_reports_near_zero_uptime() {
        let response = ProcessHealthService::new("svc").check();
        assert!(response.uptime_seconds <= 1);
    }

    #[test]
    fn with_version_overrides_reported_version() {
        let service = ProcessHealthService::new("svc").with_version("9.9.9");
        assert_eq!(service.version(), "9.9.9");
        assert_eq!(service.check().version, "9.9.9");
    }

    #[test]
    fn separate_services_have_distinct_instances() {
        let a = ProcessHealthService::new("svc");
        let b = ProcessHealthService::new("svc");
        assert_ne!(a.instance_id(), b.instance_id());
    }

    #[test]
    fn arc_delegates_to_inner_service() {
        let service = Arc::new(ProcessHealthService::new("shared"));
        let response = HealthService::check(&service);
        assert_eq!(response.service, "shared");
        assert_eq!(response.instance_id, service.instance_id());
    }
}
