//! HTTP listener, logging and transport-layer settings.
//!
//! Every field has a default, so an empty `SERVER__*` section still yields a
//! service listening on `0.0.0.0:8080` with JSON logs.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the per-request timeout layer.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_FILTER: &str = "info,entitlement_service=debug,sqlx=warn";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// `EnvFilter` directive, overridden by `RUST_LOG` when set.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Applied by the `TimeoutLayer` around every route.
    pub request_timeout_secs: u64,

    /// Comma-separated allow list. Unset means any origin.
    pub cors_origins: Option<String>,
}

/// Subscriber formatter selected at startup.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress(self.host.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured CORS origins with blanks dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Json,
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}
