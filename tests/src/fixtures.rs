//! Shared fixtures for integration tests and benchmarks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tlm_sockets::prelude::*;
use tlm_sockets::SocketShape;
use tlm_telemetry::RecordingReporter;

/// Protocol used throughout the suite: a byte buffer payload.
pub type Proto = BaseProtocol<Vec<u8>>;

/// Memory model: appends its tag to the payload and charges 10ns.
#[derive(Default)]
pub struct Memory {
    tag: u8,
    calls: AtomicUsize,
}

impl Memory {
    pub fn tagged(tag: u8) -> Self {
        Self {
            tag,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlockingTransport<Proto> for Memory {
    async fn b_transport(&self, payload: &mut Vec<u8>, delay: &mut Delay) {
        tokio::task::yield_now().await;
        self.calls.fetch_add(1, Ordering::SeqCst);
        payload.push(self.tag);
        delay.incr(Duration::from_nanos(10));
    }
}

impl ForwardTransport<Proto> for Memory {
    fn nb_transport_fw(&self, payload: &mut Vec<u8>, phase: &mut Phase, delay: &mut Delay) -> SyncStatus {
        self.calls.fetch_add(1, Ordering::SeqCst);
        payload.push(self.tag);
        delay.incr(Duration::from_nanos(10));
        match phase {
            Phase::BeginReq => {
                *phase = Phase::EndReq;
                SyncStatus::Updated
            }
            _ => SyncStatus::Accepted,
        }
    }
}

/// Initiator-side component receiving backward calls. Keeps the first
/// byte of every payload it sees, in arrival order.
#[derive(Default)]
pub struct Master {
    calls: AtomicUsize,
    received: Mutex<Vec<u8>>,
}

impl Master {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<u8> {
        self.received.lock().clone()
    }
}

impl BackwardTransport<Proto> for Master {
    fn nb_transport_bw(&self, payload: &mut Vec<u8>, phase: &mut Phase, _: &mut Delay) -> SyncStatus {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(&first) = payload.first() {
            self.received.lock().push(first);
        }
        *phase = Phase::EndResp;
        SyncStatus::Completed
    }
}

/// Context wired to an in-memory reporter.
pub fn recording_ctx() -> (SocketContext, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::new());
    (SocketContext::new(reporter.clone()), reporter)
}

/// Socket id `<parent>.<name>`; panics on malformed test input.
pub fn sid(parent: &str, name: &str) -> SocketId {
    SocketId::new(&ComponentId::parse(parent).unwrap(), name).unwrap()
}

/// Build a socket of the given shape, with sample implementations where
/// one is needed.
pub fn make_socket(shape: SocketShape, parent: &str, ctx: &SocketContext) -> Box<dyn Socket<Proto>> {
    let id = sid(parent, shape.type_name());
    let memory = Arc::new(Memory::default());
    match shape {
        SocketShape::BLOCKING_INITIATOR => Box::new(BlockingInitiatorSocket::<Proto>::new(id, ctx)),
        SocketShape::BLOCKING_TARGET => Box::new(BlockingTargetSocket::<Proto>::new(id, memory, ctx)),
        SocketShape::NB_INITIATOR => Box::new(NbInitiatorSocket::<Proto>::new(id, Arc::new(Master::default()), ctx)),
        SocketShape::NB_TARGET => Box::new(NbTargetSocket::<Proto>::new(id, memory, ctx)),
        SocketShape::BLOCKING_PASSTHROUGH_INITIATOR => {
            Box::new(BlockingPassthroughInitiatorSocket::<Proto>::new(id, ctx))
        }
        SocketShape::BLOCKING_PASSTHROUGH_TARGET => Box::new(BlockingPassthroughTargetSocket::<Proto>::new(id, ctx)),
        SocketShape::NB_PASSTHROUGH_INITIATOR => Box::new(NbPassthroughInitiatorSocket::<Proto>::new(id, ctx)),
        _ => Box::new(NbPassthroughTargetSocket::<Proto>::new(id, ctx)),
    }
}
