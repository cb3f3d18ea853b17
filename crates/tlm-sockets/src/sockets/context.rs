//! Shared collaborators handed to every socket at construction.

use std::fmt;
use std::sync::Arc;

use tlm_telemetry::TracingReporter;
use tlm_types::DynReporter;

use crate::domain::{Route, Slot, SocketConfig, SocketId};
use crate::error::SocketError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// Reporter, metrics and configuration used by a group of sockets.
///
/// Cheap to clone; all sockets of one assembly usually share one context.
#[derive(Clone)]
pub struct SocketContext {
    reporter: DynReporter,
    metrics: Arc<dyn MetricsRecorder>,
    config: SocketConfig,
}

impl Default for SocketContext {
    fn default() -> Self {
        Self::new(Arc::new(TracingReporter::new()))
    }
}

impl SocketContext {
    pub fn new(reporter: DynReporter) -> Self {
        Self {
            reporter,
            metrics: Arc::new(NoOpMetrics),
            config: SocketConfig::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_config(mut self, config: SocketConfig) -> Self {
        self.config = config;
        self
    }

    pub fn reporter(&self) -> &DynReporter {
        &self.reporter
    }

    pub fn metrics(&self) -> &dyn MetricsRecorder {
        self.metrics.as_ref()
    }

    pub fn config(&self) -> &SocketConfig {
        &self.config
    }

    /// Hand `error` to the reporter on behalf of `socket`'s component.
    pub(crate) fn report(&self, error: &SocketError, socket: &SocketId) {
        let id = error.report_id();
        self.reporter
            .report_error(id, &error.to_string(), socket.parent());
        self.metrics.record_error(id);
    }

    /// Report and hand the error back, for `Err(ctx.fail(..))` call sites.
    pub(crate) fn fail(&self, error: SocketError, socket: &SocketId) -> SocketError {
        self.report(&error, socket);
        error
    }

    /// Resolve `slot` within the configured hop limit, reporting failures
    /// on behalf of `socket`.
    pub(crate) fn route<T>(&self, slot: &Slot<T>, socket: &SocketId) -> Result<Route<T>, SocketError> {
        slot.resolve(self.config.max_relay_hops)
            .map_err(|e| self.fail(e, socket))
    }
}

impl fmt::Debug for SocketContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocketContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
