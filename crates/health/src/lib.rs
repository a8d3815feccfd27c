//! Health service layer for the server scaffold.
//!
//! This crate provides:
//! - `HealthResponse`, the status report returned on every check
//! - `HealthService`, the trait the HTTP layer depends on
//! - `ProcessHealthService`, the implementation reporting on the running process

pub mod response;
pub mod service;

pub use response::{HealthResponse, HealthStatus, InstanceId};
pub use service::{HealthService, ProcessHealthService};
