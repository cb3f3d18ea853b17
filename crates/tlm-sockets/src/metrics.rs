//! Metrics hooks for socket wiring and transport dispatch
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tlm_sockets::{Metrics, SocketContext};
//!
//! let metrics = Arc::new(Metrics::new());
//! let ctx = SocketContext::default().with_metrics(metrics.clone());
//! // ... build and connect sockets with `ctx` ...
//! println!("{:?}", metrics.snapshot());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for socket operations
///
/// Thread-safe counters for monitoring assembly and traffic.
#[derive(Default)]
pub struct Metrics {
    /// Connections accepted by the validator
    pub connects_accepted: AtomicU64,
    /// Connections rejected (validator or rebind)
    pub connects_rejected: AtomicU64,
    /// Forward calls delivered to an implementation
    pub forward_calls: AtomicU64,
    /// Backward calls delivered to an implementation
    pub backward_calls: AtomicU64,
    /// Errors handed to the reporter
    pub errors_reported: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            connects_accepted: self.connects_accepted.load(Ordering::Relaxed),
            connects_rejected: self.connects_rejected.load(Ordering::Relaxed),
            forward_calls: self.forward_calls.load(Ordering::Relaxed),
            backward_calls: self.backward_calls.load(Ordering::Relaxed),
            errors_reported: self.errors_reported.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.connects_accepted.store(0, Ordering::Relaxed);
        self.connects_rejected.store(0, Ordering::Relaxed);
        self.forward_calls.store(0, Ordering::Relaxed);
        self.backward_calls.store(0, Ordering::Relaxed);
        self.errors_reported.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub connects_accepted: u64,
    pub connects_rejected: u64,
    pub forward_calls: u64,
    pub backward_calls: u64,
    pub errors_reported: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    /// Record the outcome of one `connect`
    fn record_connect(&self, accepted: bool);

    /// Record a forward call reaching an implementation
    fn record_forward_call(&self);

    /// Record a backward call reaching an implementation
    fn record_backward_call(&self);

    /// Record an error handed to the reporter
    fn record_error(&self, id: &str);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_connect(&self, _: bool) {}
    fn record_forward_call(&self) {}
    fn record_backward_call(&self) {}
    fn record_error(&self, _: &str) {}
}

impl MetricsRecorder for Metrics {
    fn record_connect(&self, accepted: bool) {
        if accepted {
            self.connects_accepted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.connects_rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn record_forward_call(&self) {
        self.forward_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn record_backward_call(&self) {
        self.backward_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn record_error(&self, _id: &str) {
        self.errors_reported.fetch_add(1, Ordering::Relaxed);
    }
}
