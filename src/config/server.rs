//! HTTP listener configuration.
//!
//! The checkout API serves a single router, so the knobs here are few:
//! where to bind, which deployment environment we run as, the log
//! filter, a request timeout covering the PayPal round trips, and the
//! storefront origins allowed through CORS.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Listener and deployment settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. `0.0.0.0` or `127.0.0.1`.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment; production switches logs to JSON.
    #[serde(default)]
    pub environment: Environment,

    /// Default `tracing` filter, overridable via `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_level: String,

    /// Per-request timeout in seconds.
    ///
    /// Must be long enough to cover an order create or capture call to
    /// PayPal, including its OAuth token refresh.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated storefront origins allowed through CORS.
    ///
    /// Unset means any origin, which is only acceptable outside
    /// production.
    pub cors_origins: Option<String>,
}

/// Where this process is running.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Resolves the bind address from `host` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Splits `cors_origins`, dropping empty entries.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    /// Checks the listener settings before startup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_filter(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "info,course_checkout=debug,sqlx=warn".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
