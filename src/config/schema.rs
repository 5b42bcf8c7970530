//! Configuration schema definitions.
//!
//! Field names follow the service's `config.json`. Every field has a default
//! so a minimal (or empty) file is valid.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::modules::ModulePaths;

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener and template settings.
    pub http: HttpConfig,

    /// Where per-host module settings live.
    pub freeswitch: FreeswitchConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

impl ServiceConfig {
    /// Paths handed to every module adapter.
    pub fn module_paths(&self) -> ModulePaths {
        ModulePaths::new(
            &self.freeswitch.module_data_directory,
            &self.http.templates_directory,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Listen address. `":8001"` binds every interface.
    pub listen: String,

    /// Root of the XML templates.
    pub templates_directory: PathBuf,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen: ":8001".to_string(),
            templates_directory: PathBuf::from("templates"),
            request_timeout_secs: 30,
            max_body_size: 64 * 1024,
        }
    }
}

impl HttpConfig {
    /// Parse `listen`, accepting the `:PORT` shorthand.
    pub fn bind_address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        parse_listen_address(&self.listen)
    }
}

/// Parse a listen address, treating a bare `:PORT` as `0.0.0.0:PORT`.
pub fn parse_listen_address(listen: &str) -> Result<SocketAddr, std::net::AddrParseError> {
    if listen.starts_with(':') {
        format!("0.0.0.0{}", listen).parse()
    } else {
        listen.parse()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FreeswitchConfig {
    /// Directory holding `acl.json`, `distributor.json`, `sofia.json`.
    pub module_data_directory: PathBuf,
}

impl Default for FreeswitchConfig {
    fn default() -> Self {
        Self {
            module_data_directory: PathBuf::from("moduledata"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub log_level: String,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
