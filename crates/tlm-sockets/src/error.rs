//! Error types for the socket fabric
//!
//! Every variant is reported through the `ErrorReporter` at the point of
//! violation and also returned to the caller. None of them panic.

use thiserror::Error;

use crate::domain::validator::Rejection;

/// Stable report identifiers.
pub mod ids {
    pub const NO_IMP: &str = "TLM2/NOIMP";
    pub const NULL_DELAY: &str = "TLM/NULLDELAY";
    pub const TYPE_MISMATCH: &str = "TLM2/TYPE_MISMATCH";
    pub const INVALID_TOPOLOGY: &str = "TLM2/INVALID_TOPOLOGY";
    pub const ALREADY_CONNECTED: &str = "TLM2/ALREADY_CONNECTED";
    pub const UNBOUND: &str = "TLM2/UNBOUND";
    pub const HOP_LIMIT: &str = "TLM2/HOP_LIMIT";
}

/// Errors that can occur while wiring or driving sockets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocketError {
    #[error("{socket} has no implementation")]
    MissingImplementation { socket: String },

    #[error("{socket}.{method}() called with no delay")]
    NullDelay { socket: String, method: &'static str },

    #[error("type mismatch in connect -- {consumer} -> {provider} ({reason}); connection cannot be completed")]
    TypeMismatch {
        consumer: String,
        provider: String,
        reason: Rejection,
    },

    #[error("cannot connect a termination socket: {socket}")]
    InvalidTopology { socket: String },

    #[error("{socket} is already connected to {existing}")]
    AlreadyConnected { socket: String, existing: String },

    #[error("{socket} is not bound to a provider")]
    Unbound { socket: String },

    #[error("chain starting at {socket} exceeds {limit} relay hops")]
    HopLimitExceeded { socket: String, limit: usize },
}

impl SocketError {
    /// Identifier handed to the error reporter.
    pub fn report_id(&self) -> &'static str {
        match self {
            Self::MissingImplementation { .. } => ids::NO_IMP,
            Self::NullDelay { .. } => ids::NULL_DELAY,
            Self::TypeMismatch { .. } => ids::TYPE_MISMATCH,
            Self::InvalidTopology { .. } => ids::INVALID_TOPOLOGY,
            Self::AlreadyConnected { .. } => ids::ALREADY_CONNECTED,
            Self::Unbound { .. } => ids::UNBOUND,
            Self::HopLimitExceeded { .. } => ids::HOP_LIMIT,
        }
    }

    /// Map a validator rejection to the error a consumer reports.
    pub fn from_rejection(consumer: &str, provider: &str, reason: Rejection) -> Self {
        match reason {
            Rejection::NotConnectable => Self::InvalidTopology {
                socket: consumer.to_string(),
            },
            Rejection::WrongDirection | Rejection::WrongKind => Self::TypeMismatch {
                consumer: consumer.to_string(),
                provider: provider.to_string(),
                reason,
            },
        }
    }
}

/// Errors from configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
