//! Socket fabric configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use tlm_sockets::domain::SocketConfigBuilder;
//!
//! let config = SocketConfigBuilder::new()
//!     .max_relay_hops(32)
//!     .log_connections(false)
//!     .build()
//!     .expect("Valid config");
//! ```

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound accepted for `max_relay_hops`.
pub const MAX_RELAY_HOPS_CEILING: usize = 4096;

/// Fabric configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketConfig {
    /// Longest chain (in hops) a transport call will follow
    pub max_relay_hops: usize,
    /// Emit a debug event for every accepted connection
    pub log_connections: bool,
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            max_relay_hops: 64,
            log_connections: true,
        }
    }
}

impl SocketConfig {
    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_relay_hops == 0 {
            return Err(ConfigError::Invalid(
                "max_relay_hops cannot be 0".to_string(),
            ));
        }

        if self.max_relay_hops > MAX_RELAY_HOPS_CEILING {
            return Err(ConfigError::Invalid(format!(
                "max_relay_hops must be at most {}",
                MAX_RELAY_HOPS_CEILING
            )));
        }

        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// - `TLM_MAX_RELAY_HOPS`: hop limit (default: 64)
    /// - `TLM_LOG_CONNECTIONS`: log accepted connections (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_relay_hops = match env::var("TLM_MAX_RELAY_HOPS") {
            Ok(value) => value.parse().map_err(|_| {
                ConfigError::Invalid(format!("TLM_MAX_RELAY_HOPS is not a number: {value}"))
            })?,
            Err(_) => defaults.max_relay_hops,
        };

        let log_connections = env::var("TLM_LOG_CONNECTIONS")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(defaults.log_connections);

        let config = Self {
            max_relay_hops,
            log_connections,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Builder for SocketConfig with validation
#[derive(Default)]
pub struct SocketConfigBuilder {
    max_relay_hops: Option<usize>,
    log_connections: Option<bool>,
}

impl SocketConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_relay_hops(mut self, hops: usize) -> Self {
        self.max_relay_hops = Some(hops);
        self
    }

    pub fn log_connections(mut self, enabled: bool) -> Self {
        self.log_connections = Some(enabled);
        self
    }

    /// Build the SocketConfig, validating all parameters
    pub fn build(self) -> Result<SocketConfig, ConfigError> {
        let defaults = SocketConfig::default();

        let config = SocketConfig {
            max_relay_hops: self.max_relay_hops.unwrap_or(defaults.max_relay_hops),
            log_connections: self.log_connections.unwrap_or(defaults.log_connections),
        };

        config.validate()?;
        Ok(config)
    }
}
