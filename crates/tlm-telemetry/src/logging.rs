//! Structured logging setup.
//!
//! Events carry consistent fields so connection traces can be filtered:
//! - `socket`: full name of the socket emitting the event
//! - `provider`: full name of the connect target, when there is one
//! - additional context fields (`hops`, `kind`, ...)

use tracing_subscriber::{fmt, EnvFilter};

use crate::{LogConfig, TelemetryError};

/// Install a global `fmt` subscriber filtered by `config.log_level`.
///
/// `RUST_LOG` takes precedence when set. Fails if a global subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(config.with_location)
        .with_line_number(config.with_location);

    if config.json_logs {
        builder
            .json()
            .try_init()
            .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
    } else {
        builder
            .try_init()
            .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}

/// Log a socket-related event with standard fields.
#[macro_export]
macro_rules! log_socket_event {
    ($level:ident, $socket:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            socket = %$socket,
            $($($field)*,)?
            $msg
        )
    };
}
