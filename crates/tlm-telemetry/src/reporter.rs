//! `ErrorReporter` implementations.
//!
//! - `TracingReporter`: emits every report as a `tracing` error event and
//!   keeps per-id counts. Default reporter of the socket fabric.
//! - `RecordingReporter`: keeps every report in memory. Intended for tests
//!   and for assembly code that wants to inspect errors after wiring.

use std::collections::HashMap;

use parking_lot::Mutex;
use tlm_types::{ComponentId, ErrorReporter, ReportedError};

/// Reporter that logs through `tracing`.
#[derive(Default)]
pub struct TracingReporter {
    counts: Mutex<HashMap<String, u64>>,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports seen for `id`.
    pub fn count(&self, id: &str) -> u64 {
        self.counts.lock().get(id).copied().unwrap_or(0)
    }

    /// Number of reports seen for all ids.
    pub fn total(&self) -> u64 {
        self.counts.lock().values().sum()
    }
}

impl ErrorReporter for TracingReporter {
    fn report_error(&self, id: &str, message: &str, origin: &ComponentId) {
        tracing::error!(id = id, origin = %origin, "{}", message);
        *self.counts.lock().entry(id.to_string()).or_insert(0) += 1;
    }
}

/// Reporter that records every report in arrival order.
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<ReportedError>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all reports so far.
    pub fn reports(&self) -> Vec<ReportedError> {
        self.reports.lock().clone()
    }

    /// Number of reports carrying `id`.
    pub fn count(&self, id: &str) -> usize {
        self.reports.lock().iter().filter(|r| r.id == id).count()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Drain all reports.
    pub fn take(&self) -> Vec<ReportedError> {
        std::mem::take(&mut *self.reports.lock())
    }
}

impl ErrorReporter for RecordingReporter {
    fn report_error(&self, id: &str, message: &str, origin: &ComponentId) {
        tracing::debug!(id = id, origin = %origin, "recorded: {}", message);
        self.reports
            .lock()
            .push(ReportedError::new(id, message, origin.clone()));
    }
}
