//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the request.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Process-level failures that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// An environment variable holds an unusable value.
    #[error("invalid {var}={value:?}: {reason}")]
    Config {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// The Prometheus recorder could not be installed.
    #[error("failed to install metrics recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_returns_404_json() {
        let response = ApiError::NotFound("no route for /nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "no route for /nope");
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ServerError::Config {
            var: "PORT",
            value: "abc".into(),
            reason: "invalid digit found in string".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid PORT=\"abc\": invalid digit found in string"
        );
    }

    #[test]
    fn bind_error_includes_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:80".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:80: denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
