//! Logging configuration from environment variables.

use std::env;

/// Configuration for the fabric's log output.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Service name attached to the startup log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Include source file and line in each event
    pub with_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "tlm-fabric".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_location: false,
        }
    }
}

impl LogConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TLM_SERVICE_NAME`: Service name (default: tlm-fabric)
    /// - `TLM_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `TLM_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `TLM_LOG_LOCATION`: Include file/line (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("TLM_SERVICE_NAME")
                .unwrap_or_else(|_| "tlm-fabric".to_string()),

            log_level: env::var("TLM_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("TLM_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),

            with_location: env::var("TLM_LOG_LOCATION")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Builder-style method to set the level filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Builder-style method to toggle JSON output
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
