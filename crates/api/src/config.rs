//! Application configuration loaded from environment variables.

use std::str::FromStr;

use crate::error::ServerError;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `SERVICE_NAME` — name reported by the health check (default: `"server-template"`)
/// - `BASE_PATH` — prefix every route is mounted under (default: none)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub service_name: String,
    pub base_path: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Unset variables take their default; set but unparsable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ServerError::Config {
                    var: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(|reason| ServerError::Config {
                var: "LOG_FORMAT",
                value: raw.clone(),
                reason,
            })?,
            None => defaults.log_format,
        };

        let base_path = match lookup("BASE_PATH") {
            Some(raw) => normalize_base_path(&raw).map_err(|reason| ServerError::Config {
                var: "BASE_PATH",
                value: raw.clone(),
                reason,
            })?,
            None => defaults.base_path,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            base_path,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            service_name: "server-template".to_string(),
            base_path: String::new(),
        }
    }
}

/// Normalizes a route prefix to `/segment[/segment...]`, or empty for none.
///
/// Segments must be non-empty literals: route parameters (`{..}`) and
/// wildcards (`*`) cannot be mounted as a prefix.
pub fn normalize_base_path(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    for segment in trimmed.split('/') {
        if segment.is_empty() {
            return Err("empty path segment".to_string());
        }
        if segment.contains(['{', '}', '*']) {
            return Err(format!(
                "segment `{segment}` contains a route parameter or wildcard"
            ));
        }
    }

    Ok(format!("/{trimmed}"))
}
