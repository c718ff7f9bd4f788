//! Configuration loading and constants.
//!
//! Defines the default bind address, the static service identity, logging
//! defaults and the HTTP header values used by the routes. `AppConfig` is the
//! root configuration struct. It can be built from defaults alone or loaded
//! from a TOML file in which every table and key is optional.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

// =============================================================================
// HTTP Server Defaults
// =============================================================================

/// Default bind host (all interfaces, reachable from outside a container)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

// =============================================================================
// Service Identity
// =============================================================================

/// Identifier reported by the health endpoint
pub const DEFAULT_SERVICE_NAME: &str = "test-python-app_1";

/// Plain-text body served at the root path
pub const DEFAULT_GREETING: &str = "Hello from Microservice A (Python/Flask)!";

/// Status reported by the health endpoint while the process is serving
pub const HEALTH_STATUS_UP: &str = "UP";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Health probes must never be answered from a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Crate target used in log filter directives
const LOG_TARGET: &str = "microservice_a";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", LOG_TARGET);

/// Log filter used when the debug flag is set and RUST_LOG is not set
pub const DEBUG_LOG_FILTER: &str = formatcp!("{}=debug,tower_http=debug", LOG_TARGET);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Accepted values for `logging.format`
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Root configuration, resolved once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Static identity of this deployment
    #[serde(default)]
    pub service: ServiceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Verbose logging for local development
    #[serde(default)]
    pub debug: bool,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            debug: false,
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    /// `host:port` form of the bind target, used in logs and error messages.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default = "ServiceConfig::default_name")]
    pub name: String,
    #[serde(default = "ServiceConfig::default_greeting")]
    pub greeting: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            greeting: Self::default_greeting(),
        }
    }
}

impl ServiceConfig {
    fn default_name() -> String {
        DEFAULT_SERVICE_NAME.to_string()
    }

    fn default_greeting() -> String {
        DEFAULT_GREETING.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Log filter to use when neither the CLI nor RUST_LOG provides one.
    pub fn default_log_filter(&self) -> &'static str {
        if self.http.debug {
            DEBUG_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.service.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "service.name must not be empty".to_string(),
            ));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be one of {:?}, got \"{}\"",
                LOG_FORMATS, self.logging.format
            )));
        }
        Ok(())
    }
}
