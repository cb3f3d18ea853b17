//! # Error Reporting Contract
//!
//! Sockets never unwind on a protocol violation. They hand a structured
//! report to an `ErrorReporter` and carry on; counting, summarizing and
//! deciding when too many errors are fatal all belong to the reporter.
//!
//! ## Example Implementation
//!
//! ```rust,ignore
//! use tlm_types::{ComponentId, ErrorReporter};
//!
//! struct StderrReporter;
//!
//! impl ErrorReporter for StderrReporter {
//!     fn report_error(&self, id: &str, message: &str, origin: &ComponentId) {
//!         eprintln!("[{id}] {origin}: {message}");
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::ComponentId;

/// Sink for structured errors.
///
/// Implementations must not alter the caller's control flow: the call
/// returns and the socket continues with its benign default.
pub trait ErrorReporter: Send + Sync {
    /// Report one error.
    ///
    /// # Arguments
    /// * `id` - Stable error identifier (e.g. `TLM/NULLDELAY`)
    /// * `message` - Human-readable explanation
    /// * `origin` - Component that owns the reporting socket
    fn report_error(&self, id: &str, message: &str, origin: &ComponentId);
}

/// Shared reporter handle.
pub type DynReporter = Arc<dyn ErrorReporter>;

/// One structured error as delivered to a reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedError {
    /// Stable identifier.
    pub id: String,
    /// Human-readable message.
    pub message: String,
    /// Originating component.
    pub origin: ComponentId,
}

impl ReportedError {
    pub fn new(id: impl Into<String>, message: impl Into<String>, origin: ComponentId) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            origin,
        }
    }
}

impl fmt::Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.id, self.origin, self.message)
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for Arc<R> {
    fn report_error(&self, id: &str, message: &str, origin: &ComponentId) {
        (**self).report_error(id, message, origin);
    }
}
