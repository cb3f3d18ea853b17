//! Terminator sockets: the two ends of a chain.
//!
//! | Socket | Owns | Calls |
//! |--------|------|-------|
//! | `BlockingInitiatorSocket` | forward slot | `b_transport` along the chain |
//! | `BlockingTargetSocket` | blocking implementation | `b_transport` into it |
//! | `NbInitiatorSocket` | forward slot, backward implementation | `nb_transport_fw` along the chain |
//! | `NbTargetSocket` | forward implementation, reverse slot | `nb_transport_fw` into it, `nb_transport_bw` back |
//!
//! Targets cannot be connected to anything; they are only ever providers.

use std::fmt;
use std::sync::Arc;

use tlm_types::{Delay, Protocol, SyncStatus};

use super::binder::{establish, refuse, ConsumerWiring};
use super::context::SocketContext;
use super::imp::{BackwardImp, BlockingImp, ForwardImp, ImpEndpoint, ImpSource};
use super::socket_ref::SocketRef;
use crate::domain::{Endpoint, Hop, Slot, SocketId, SocketShape};
use crate::error::SocketError;
use crate::ports::{BackwardTransport, BlockingTransport, ForwardTransport, Socket};

/// Starts blocking transactions.
pub struct BlockingInitiatorSocket<Pr: Protocol> {
    endpoint: Endpoint,
    forward: Arc<Slot<BlockingImp<Pr>>>,
    ctx: SocketContext,
}

impl<Pr: Protocol> BlockingInitiatorSocket<Pr> {
    pub fn new(id: SocketId, ctx: &SocketContext) -> Self {
        Self {
            forward: Slot::new(id.full_name()),
            endpoint: Endpoint::new(id, SocketShape::BLOCKING_INITIATOR),
            ctx: ctx.clone(),
        }
    }

    /// Send `payload` to the target at the end of the chain and wait for it.
    ///
    /// Fails with `Unbound` when any socket along the chain is unconnected.
    pub async fn b_transport(
        &self,
        payload: &mut Pr::Payload,
        delay: Option<&mut Delay>,
    ) -> Result<(), SocketError> {
        let route = self.ctx.route(&self.forward, self.endpoint.id())?;
        route.terminal.b_transport(payload, delay).await;
        Ok(())
    }

    /// Number of connection edges between this socket and its target.
    ///
    /// A query: an unbound or cyclic chain comes back as `Err` without
    /// reaching the error reporter.
    pub fn forward_hops(&self) -> Result<usize, SocketError> {
        self.forward
            .resolve(self.ctx.config().max_relay_hops)
            .map(|route| route.hops)
    }
}

impl<Pr: Protocol> Socket<Pr> for BlockingInitiatorSocket<Pr> {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn socket_ref(&self) -> SocketRef<'_, Pr> {
        SocketRef::BlockingInitiator(self)
    }

    fn connect_ref(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError> {
        establish(
            &self.endpoint,
            &self.ctx,
            ConsumerWiring::Blocking {
                forward: &self.forward,
            },
            provider,
        )
    }
}

/// Receives blocking transactions and hands them to its implementation.
pub struct BlockingTargetSocket<Pr: Protocol> {
    endpoint: Endpoint,
    imp: Arc<BlockingImp<Pr>>,
    ctx: SocketContext,
}

impl<Pr: Protocol> BlockingTargetSocket<Pr> {
    /// Build the socket. A missing implementation is reported once; the
    /// socket stays connectable and reports again on every call.
    pub fn new(
        id: SocketId,
        imp: impl Into<ImpSource<dyn BlockingTransport<Pr>>>,
        ctx: &SocketContext,
    ) -> Self {
        let imp = ImpEndpoint::bind(id.clone(), imp.into(), ctx);
        Self::assemble(id, imp, ctx)
    }

    /// Like `new`, but a missing implementation is an error.
    pub fn try_new(
        id: SocketId,
        imp: impl Into<ImpSource<dyn BlockingTransport<Pr>>>,
        ctx: &SocketContext,
    ) -> Result<Self, SocketError> {
        let imp = ImpEndpoint::try_bind(id.clone(), imp.into(), ctx)?;
        Ok(Self::assemble(id, imp, ctx))
    }

    fn assemble(id: SocketId, imp: BlockingImp<Pr>, ctx: &SocketContext) -> Self {
        Self {
            endpoint: Endpoint::new(id, SocketShape::BLOCKING_TARGET),
            imp: Arc::new(imp),
            ctx: ctx.clone(),
        }
    }

    pub async fn b_transport(&self, payload: &mut Pr::Payload, delay: Option<&mut Delay>) {
        self.imp.b_transport(payload, delay).await
    }

    pub(crate) fn imp(&self) -> &Arc<BlockingImp<Pr>> {
        &self.imp
    }
}

impl<Pr: Protocol> Socket<Pr> for BlockingTargetSocket<Pr> {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn socket_ref(&self) -> SocketRef<'_, Pr> {
        SocketRef::BlockingTarget(self)
    }

    fn connect_ref(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError> {
        refuse(&self.endpoint, &self.ctx, provider)
    }

    fn has_implementation(&self) -> bool {
        self.imp.has_implementation()
    }
}

/// Starts non-blocking transactions and receives their backward calls.
pub struct NbInitiatorSocket<Pr: Protocol> {
    endpoint: Endpoint,
    forward: Arc<Slot<ForwardImp<Pr>>>,
    bw_imp: Arc<BackwardImp<Pr>>,
    ctx: SocketContext,
}

impl<Pr: Protocol> NbInitiatorSocket<Pr> {
    /// Build the socket around the implementation receiving backward calls.
    pub fn new(
        id: SocketId,
        bw_imp: impl Into<ImpSource<dyn BackwardTransport<Pr>>>,
        ctx: &SocketContext,
    ) -> Self {
        let bw_imp = ImpEndpoint::bind(id.clone(), bw_imp.into(), ctx);
        Self::assemble(id, bw_imp, ctx)
    }

    pub fn try_new(
        id: SocketId,
        bw_imp: impl Into<ImpSource<dyn BackwardTransport<Pr>>>,
        ctx: &SocketContext,
    ) -> Result<Self, SocketError> {
        let bw_imp = ImpEndpoint::try_bind(id.clone(), bw_imp.into(), ctx)?;
        Ok(Self::assemble(id, bw_imp, ctx))
    }

    fn assemble(id: SocketId, bw_imp: BackwardImp<Pr>, ctx: &SocketContext) -> Self {
        Self {
            forward: Slot::new(id.full_name()),
            endpoint: Endpoint::new(id, SocketShape::NB_INITIATOR),
            bw_imp: Arc::new(bw_imp),
            ctx: ctx.clone(),
        }
    }

    pub fn nb_transport_fw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: Option<&mut Delay>,
    ) -> Result<SyncStatus, SocketError> {
        let route = self.ctx.route(&self.forward, self.endpoint.id())?;
        Ok(route.terminal.nb_transport_fw(payload, phase, delay))
    }

    /// Edges to the target. Silent on failure, like `BlockingInitiatorSocket::forward_hops`.
    pub fn forward_hops(&self) -> Result<usize, SocketError> {
        self.forward
            .resolve(self.ctx.config().max_relay_hops)
            .map(|route| route.hops)
    }
}

impl<Pr: Protocol> Socket<Pr> for NbInitiatorSocket<Pr> {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn socket_ref(&self) -> SocketRef<'_, Pr> {
        SocketRef::NbInitiator(self)
    }

    fn connect_ref(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError> {
        establish(
            &self.endpoint,
            &self.ctx,
            ConsumerWiring::NonBlocking {
                forward: &self.forward,
                reverse_ingress: Hop::Terminal(Arc::clone(&self.bw_imp)),
            },
            provider,
        )
    }

    fn has_implementation(&self) -> bool {
        self.bw_imp.has_implementation()
    }
}

/// Receives non-blocking transactions; sends backward calls to whichever
/// initiator its reverse channel was bound to.
pub struct NbTargetSocket<Pr: Protocol> {
    endpoint: Endpoint,
    fw_imp: Arc<ForwardImp<Pr>>,
    reverse: Arc<Slot<BackwardImp<Pr>>>,
    ctx: SocketContext,
}

impl<Pr: Protocol> NbTargetSocket<Pr> {
    pub fn new(
        id: SocketId,
        fw_imp: impl Into<ImpSource<dyn ForwardTransport<Pr>>>,
        ctx: &SocketContext,
    ) -> Self {
        let fw_imp = ImpEndpoint::bind(id.clone(), fw_imp.into(), ctx);
        Self::assemble(id, fw_imp, ctx)
    }

    pub fn try_new(
        id: SocketId,
        fw_imp: impl Into<ImpSource<dyn ForwardTransport<Pr>>>,
        ctx: &SocketContext,
    ) -> Result<Self, SocketError> {
        let fw_imp = ImpEndpoint::try_bind(id.clone(), fw_imp.into(), ctx)?;
        Ok(Self::assemble(id, fw_imp, ctx))
    }

    fn assemble(id: SocketId, fw_imp: ForwardImp<Pr>, ctx: &SocketContext) -> Self {
        Self {
            reverse: Slot::new(id.full_name()),
            endpoint: Endpoint::new(id, SocketShape::NB_TARGET),
            fw_imp: Arc::new(fw_imp),
            ctx: ctx.clone(),
        }
    }

    pub fn nb_transport_fw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: Option<&mut Delay>,
    ) -> SyncStatus {
        self.fw_imp.nb_transport_fw(payload, phase, delay)
    }

    /// Call back towards the initiator.
    ///
    /// Fails with `Unbound` until some initiator or pass-through has
    /// connected to this socket.
    pub fn nb_transport_bw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: Option<&mut Delay>,
    ) -> Result<SyncStatus, SocketError> {
        let route = self.ctx.route(&self.reverse, self.endpoint.id())?;
        Ok(route.terminal.nb_transport_bw(payload, phase, delay))
    }

    /// Edges back to the initiator. Failures are returned, not reported.
    pub fn backward_hops(&self) -> Result<usize, SocketError> {
        self.reverse
            .resolve(self.ctx.config().max_relay_hops)
            .map(|route| route.hops)
    }

    pub(crate) fn fw_imp(&self) -> &Arc<ForwardImp<Pr>> {
        &self.fw_imp
    }

    pub(crate) fn reverse_slot(&self) -> &Arc<Slot<BackwardImp<Pr>>> {
        &self.reverse
    }
}

impl<Pr: Protocol> Socket<Pr> for NbTargetSocket<Pr> {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn socket_ref(&self) -> SocketRef<'_, Pr> {
        SocketRef::NbTarget(self)
    }

    fn connect_ref(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError> {
        refuse(&self.endpoint, &self.ctx, provider)
    }

    fn has_implementation(&self) -> bool {
        self.fw_imp.has_implementation()
    }
}

macro_rules! impl_socket_debug {
    ($($socket:ident),*) => {
        $(
            impl<Pr: Protocol> fmt::Debug for $socket<Pr> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($socket))
                        .field("endpoint", &self.endpoint)
                        .finish_non_exhaustive()
                }
            }
        )*
    };
}

impl_socket_debug!(
    BlockingInitiatorSocket,
    BlockingTargetSocket,
    NbInitiatorSocket,
    NbTargetSocket
);
