//! HTTP route handlers.

pub mod health;
pub mod metrics;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Handles requests no route matched.
pub async fn fallback(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {method} {}", uri.path()))
}
