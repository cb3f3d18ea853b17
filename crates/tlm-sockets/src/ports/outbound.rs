//! Outbound Ports (Driven Ports)
//!
//! Contracts the fabric calls into: the transport implementations bound to
//! terminator sockets, and the error reporter.
//!
//! The fabric imposes no locking around these calls. An implementation
//! shared by several sockets must provide its own mutual exclusion.

use async_trait::async_trait;
use tlm_types::{Delay, Protocol, SyncStatus};

pub use tlm_types::{DynReporter, ErrorReporter};

/// Blocking forward transport (Driven Port)
///
/// A suspending call: the caller's task waits until the transaction is
/// complete. Several callers may be in flight at once.
#[async_trait]
pub trait BlockingTransport<Pr: Protocol>: Send + Sync {
    async fn b_transport(&self, payload: &mut Pr::Payload, delay: &mut Delay);
}

/// Non-blocking forward transport (Driven Port)
///
/// Returns immediately. The returned status tells the caller whether to
/// wait for a backward call (`Accepted`), adopt the updated phase
/// (`Updated`), or treat the exchange as done (`Completed`).
pub trait ForwardTransport<Pr: Protocol>: Send + Sync {
    fn nb_transport_fw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: &mut Delay,
    ) -> SyncStatus;
}

/// Non-blocking backward transport (Driven Port)
///
/// Invoked along the reverse channel, from the target side back to the
/// initiator that owns the implementation.
pub trait BackwardTransport<Pr: Protocol>: Send + Sync {
    fn nb_transport_bw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: &mut Delay,
    ) -> SyncStatus;
}
