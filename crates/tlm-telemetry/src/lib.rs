//! # TLM Telemetry
//!
//! Logging and error-report sinks for the socket fabric.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` setup with env filter, optional JSON
//! - **Reporters**: `TracingReporter` (logs and counts) and
//!   `RecordingReporter` (in-memory, for tests and post-assembly checks)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tlm_telemetry::{init_logging, LogConfig, TracingReporter};
//!
//! init_logging(&LogConfig::from_env())?;
//! let reporter = std::sync::Arc::new(TracingReporter::new());
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TLM_SERVICE_NAME` | `tlm-fabric` | Service name in the startup event |
//! | `TLM_LOG_LEVEL` | `info` | Log level filter |
//! | `TLM_JSON_LOGS` | `false` | JSON formatted output |
//! | `TLM_LOG_LOCATION` | `false` | Include file and line |

mod config;
mod logging;
mod reporter;

pub use config::LogConfig;
pub use logging::init_logging;
pub use reporter::{RecordingReporter, TracingReporter};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}
