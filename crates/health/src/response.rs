//! Health report value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Overall status reported by a health check.
///
/// Only `Ok` exists: a process that can answer the request is healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

impl HealthStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Ok => "ok",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a running server instance.
///
/// Generated once per process so replicas behind a load balancer can be
/// told apart in health reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Creates a new random instance ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for InstanceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Status report produced by a single health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub instance_id: InstanceId,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Returns true if the report describes a healthy instance.
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Ok
    }
}
