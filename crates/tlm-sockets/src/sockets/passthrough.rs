//! Pass-through sockets: relays inside a hierarchy.
//!
//! A pass-through socket owns a forward slot (and, when non-blocking, a
//! reverse slot) but never an implementation. Calls entering it continue
//! along whatever the slot resolves to. The initiator-side and target-side
//! flavours differ only in which providers the validator lets them connect
//! to: a target-side relay may only connect towards a target-role socket.
//!
//! Chains may be connected in any order; a relay connected before its
//! downstream neighbour simply resolves once that neighbour is connected.

use std::fmt;
use std::sync::Arc;

use tlm_types::{Delay, Protocol, SyncStatus};

use super::binder::{establish, ConsumerWiring};
use super::context::SocketContext;
use super::imp::{BackwardImp, BlockingImp, ForwardImp};
use super::socket_ref::SocketRef;
use crate::domain::{Endpoint, Hop, Slot, SocketId, SocketShape};
use crate::error::SocketError;
use crate::ports::Socket;

/// Blocking relay core shared by both blocking pass-through flavours.
struct BlockingRelay<Pr: Protocol> {
    endpoint: Endpoint,
    forward: Arc<Slot<BlockingImp<Pr>>>,
    ctx: SocketContext,
}

impl<Pr: Protocol> BlockingRelay<Pr> {
    fn new(id: SocketId, shape: SocketShape, ctx: &SocketContext) -> Self {
        Self {
            forward: Slot::new(id.full_name()),
            endpoint: Endpoint::new(id, shape),
            ctx: ctx.clone(),
        }
    }

    async fn b_transport(
        &self,
        payload: &mut Pr::Payload,
        delay: Option<&mut Delay>,
    ) -> Result<(), SocketError> {
        let route = self.ctx.route(&self.forward, self.endpoint.id())?;
        route.terminal.b_transport(payload, delay).await;
        Ok(())
    }

    // Hop queries resolve the slot directly so they stay off the reporter.
    fn forward_hops(&self) -> Result<usize, SocketError> {
        self.forward
            .resolve(self.ctx.config().max_relay_hops)
            .map(|route| route.hops)
    }

    fn connect(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError> {
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

/// Non-blocking relay core: a forward slot plus the reverse slot the
/// backward binder fills in when an upstream socket connects to it.
struct NbRelay<Pr: Protocol> {
    endpoint: Endpoint,
    forward: Arc<Slot<ForwardImp<Pr>>>,
    reverse: Arc<Slot<BackwardImp<Pr>>>,
    ctx: SocketContext,
}

impl<Pr: Protocol> NbRelay<Pr> {
    fn new(id: SocketId, shape: SocketShape, ctx: &SocketContext) -> Self {
        Self {
            forward: Slot::new(id.full_name()),
            reverse: Slot::new(id.full_name()),
            endpoint: Endpoint::new(id, shape),
            ctx: ctx.clone(),
        }
    }

    fn nb_transport_fw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: Option<&mut Delay>,
    ) -> Result<SyncStatus, SocketError> {
        let route = self.ctx.route(&self.forward, self.endpoint.id())?;
        Ok(route.terminal.nb_transport_fw(payload, phase, delay))
    }

    fn nb_transport_bw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: Option<&mut Delay>,
    ) -> Result<SyncStatus, SocketError> {
        let route = self.ctx.route(&self.reverse, self.endpoint.id())?;
        Ok(route.terminal.nb_transport_bw(payload, phase, delay))
    }

    fn forward_hops(&self) -> Result<usize, SocketError> {
        self.forward
            .resolve(self.ctx.config().max_relay_hops)
            .map(|route| route.hops)
    }

    fn backward_hops(&self) -> Result<usize, SocketError> {
        self.reverse
            .resolve(self.ctx.config().max_relay_hops)
            .map(|route| route.hops)
    }

    fn connect(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError> {
        establish(
            &self.endpoint,
            &self.ctx,
            ConsumerWiring::NonBlocking {
                forward: &self.forward,
                reverse_ingress: Hop::Relay(Arc::clone(&self.reverse)),
            },
            provider,
        )
    }
}

macro_rules! blocking_passthrough {
    ($(#[$doc:meta])* $name:ident, $shape:expr, $variant:ident) => {
        $(#[$doc])*
        pub struct $name<Pr: Protocol> {
            relay: BlockingRelay<Pr>,
        }

        impl<Pr: Protocol> $name<Pr> {
            pub fn new(id: SocketId, ctx: &SocketContext) -> Self {
                Self {
                    relay: BlockingRelay::new(id, $shape, ctx),
                }
            }

            /// Relay a blocking call to whatever this socket resolves to.
            pub async fn b_transport(
                &self,
                payload: &mut Pr::Payload,
                delay: Option<&mut Delay>,
            ) -> Result<(), SocketError> {
                self.relay.b_transport(payload, delay).await
            }

            /// Edges to the target; a query that never reports.
            pub fn forward_hops(&self) -> Result<usize, SocketError> {
                self.relay.forward_hops()
            }

            pub(crate) fn forward_slot(&self) -> &Arc<Slot<BlockingImp<Pr>>> {
                &self.relay.forward
            }
        }

        impl<Pr: Protocol> Socket<Pr> for $name<Pr> {
            fn endpoint(&self) -> &Endpoint {
                &self.relay.endpoint
            }

            fn socket_ref(&self) -> SocketRef<'_, Pr> {
                SocketRef::$variant(self)
            }

            fn connect_ref(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError> {
                self.relay.connect(provider)
            }
        }
    };
}

macro_rules! nb_passthrough {
    ($(#[$doc:meta])* $name:ident, $shape:expr, $variant:ident) => {
        $(#[$doc])*
        pub struct $name<Pr: Protocol> {
            relay: NbRelay<Pr>,
        }

        impl<Pr: Protocol> $name<Pr> {
            pub fn new(id: SocketId, ctx: &SocketContext) -> Self {
                Self {
                    relay: NbRelay::new(id, $shape, ctx),
                }
            }

            /// Relay a forward call towards the target.
            pub fn nb_transport_fw(
                &self,
                payload: &mut Pr::Payload,
                phase: &mut Pr::Phase,
                delay: Option<&mut Delay>,
            ) -> Result<SyncStatus, SocketError> {
                self.relay.nb_transport_fw(payload, phase, delay)
            }

            /// Relay a backward call towards the initiator.
            pub fn nb_transport_bw(
                &self,
                payload: &mut Pr::Payload,
                phase: &mut Pr::Phase,
                delay: Option<&mut Delay>,
            ) -> Result<SyncStatus, SocketError> {
                self.relay.nb_transport_bw(payload, phase, delay)
            }

            /// Edges to the target; a query that never reports.
            pub fn forward_hops(&self) -> Result<usize, SocketError> {
                self.relay.forward_hops()
            }

            /// Edges back to the initiator; a query that never reports.
            pub fn backward_hops(&self) -> Result<usize, SocketError> {
                self.relay.backward_hops()
            }

            pub(crate) fn forward_slot(&self) -> &Arc<Slot<ForwardImp<Pr>>> {
                &self.relay.forward
            }

            pub(crate) fn reverse_slot(&self) -> &Arc<Slot<BackwardImp<Pr>>> {
                &self.relay.reverse
            }
        }

        impl<Pr: Protocol> Socket<Pr> for $name<Pr> {
            fn endpoint(&self) -> &Endpoint {
                &self.relay.endpoint
            }

            fn socket_ref(&self) -> SocketRef<'_, Pr> {
                SocketRef::$variant(self)
            }

            fn connect_ref(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError> {
                self.relay.connect(provider)
            }
        }
    };
}

blocking_passthrough!(
    /// Blocking relay on the initiator side of a hierarchy boundary.
    BlockingPassthroughInitiatorSocket,
    SocketShape::BLOCKING_PASSTHROUGH_INITIATOR,
    BlockingPassthroughInitiator
);

blocking_passthrough!(
    /// Blocking relay on the target side of a hierarchy boundary.
    BlockingPassthroughTargetSocket,
    SocketShape::BLOCKING_PASSTHROUGH_TARGET,
    BlockingPassthroughTarget
);

nb_passthrough!(
    /// Non-blocking relay on the initiator side of a hierarchy boundary.
    NbPassthroughInitiatorSocket,
    SocketShape::NB_PASSTHROUGH_INITIATOR,
    NbPassthroughInitiator
);

nb_passthrough!(
    /// Non-blocking relay on the target side of a hierarchy boundary.
    NbPassthroughTargetSocket,
    SocketShape::NB_PASSTHROUGH_TARGET,
    NbPassthroughTarget
);

impl<Pr: Protocol> fmt::Debug for BlockingRelay<Pr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingRelay")
            .field("endpoint", &self.endpoint)
            .field("forward", &self.forward)
            .finish()
    }
}

impl<Pr: Protocol> fmt::Debug for NbRelay<Pr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NbRelay")
            .field("endpoint", &self.endpoint)
            .field("forward", &self.forward)
            .field("reverse", &self.reverse)
            .finish()
    }
}

macro_rules! impl_relay_debug {
    ($($socket:ident),*) => {
        $(
            impl<Pr: Protocol> fmt::Debug for $socket<Pr> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($socket)).field(&self.relay).finish()
                }
            }
        )*
    };
}

impl_relay_debug!(
    BlockingPassthroughInitiatorSocket,
    BlockingPassthroughTargetSocket,
    NbPassthroughInitiatorSocket,
    NbPassthroughTargetSocket
);
