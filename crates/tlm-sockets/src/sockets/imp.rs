//! Implementation binding
//!
//! `ImpSource` resolves which implementation a terminator socket binds to:
//! the one given explicitly, or else the one offered by the parent
//! component. `ImpEndpoint` is the bound result, and the only place where
//! the fabric calls into user code. Every call it makes is guarded:
//!
//! 1. an absent delay is reported (`NullDelay`) and the call is skipped
//! 2. a missing implementation is reported (`MissingImplementation`) and
//!    the call is skipped
//!
//! Skipped blocking calls return `()`, skipped non-blocking calls return
//! `SyncStatus::Completed`.

use std::fmt;
use std::sync::Arc;

use tlm_types::{Delay, Protocol, SyncStatus};

use super::context::SocketContext;
use crate::domain::SocketId;
use crate::error::SocketError;
use crate::ports::{BackwardTransport, BlockingTransport, ForwardTransport};

/// Where a terminator socket gets its implementation from.
pub struct ImpSource<I: ?Sized> {
    explicit: Option<Arc<I>>,
    parent: Option<Arc<I>>,
}

impl<I: ?Sized> Default for ImpSource<I> {
    fn default() -> Self {
        Self {
            explicit: None,
            parent: None,
        }
    }
}

impl<I: ?Sized> ImpSource<I> {
    /// No implementation available.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn explicit(imp: Arc<I>) -> Self {
        Self {
            explicit: Some(imp),
            parent: None,
        }
    }

    /// Use the parent component as the implementation.
    pub fn from_parent(parent: Arc<I>) -> Self {
        Self {
            explicit: None,
            parent: Some(parent),
        }
    }

    /// Fall back to `parent` when nothing explicit was given.
    pub fn or_parent(mut self, parent: Arc<I>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Pick the implementation for `socket`: explicit first, then parent.
    pub fn resolve(self, socket: &SocketId) -> Result<Arc<I>, SocketError> {
        self.explicit
            .or(self.parent)
            .ok_or_else(|| SocketError::MissingImplementation {
                socket: socket.full_name().to_string(),
            })
    }
}

impl<Pr: Protocol, M: BlockingTransport<Pr> + 'static> From<Arc<M>>
    for ImpSource<dyn BlockingTransport<Pr>>
{
    fn from(imp: Arc<M>) -> Self {
        Self::explicit(imp)
    }
}

impl<Pr: Protocol, M: ForwardTransport<Pr> + 'static> From<Arc<M>>
    for ImpSource<dyn ForwardTransport<Pr>>
{
    fn from(imp: Arc<M>) -> Self {
        Self::explicit(imp)
    }
}

impl<Pr: Protocol, M: BackwardTransport<Pr> + 'static> From<Arc<M>>
    for ImpSource<dyn BackwardTransport<Pr>>
{
    fn from(imp: Arc<M>) -> Self {
        Self::explicit(imp)
    }
}

/// Endpoint bound to at most one implementation.
pub struct ImpEndpoint<I: ?Sized> {
    socket: SocketId,
    imp: Option<Arc<I>>,
    ctx: SocketContext,
}

/// Forward terminal of a blocking chain.
pub type BlockingImp<Pr> = ImpEndpoint<dyn BlockingTransport<Pr>>;
/// Forward terminal of a non-blocking chain.
pub type ForwardImp<Pr> = ImpEndpoint<dyn ForwardTransport<Pr>>;
/// Reverse terminal of a non-blocking chain.
pub type BackwardImp<Pr> = ImpEndpoint<dyn BackwardTransport<Pr>>;

impl<I: ?Sized> ImpEndpoint<I> {
    /// Resolve `source`; report `MissingImplementation` once if it fails
    /// and keep the endpoint without an implementation.
    pub(crate) fn bind(socket: SocketId, source: ImpSource<I>, ctx: &SocketContext) -> Self {
        let imp = match source.resolve(&socket) {
            Ok(imp) => Some(imp),
            Err(err) => {
                ctx.report(&err, &socket);
                None
            }
        };
        Self {
            socket,
            imp,
            ctx: ctx.clone(),
        }
    }

    /// Like `bind`, but a missing implementation is returned as an error.
    pub(crate) fn try_bind(
        socket: SocketId,
        source: ImpSource<I>,
        ctx: &SocketContext,
    ) -> Result<Self, SocketError> {
        let imp = source.resolve(&socket).map_err(|e| ctx.fail(e, &socket))?;
        Ok(Self {
            socket,
            imp: Some(imp),
            ctx: ctx.clone(),
        })
    }

    pub fn has_implementation(&self) -> bool {
        self.imp.is_some()
    }

    pub fn implementation(&self) -> Option<&Arc<I>> {
        self.imp.as_ref()
    }

    fn checked<'s, 'd>(
        &'s self,
        delay: Option<&'d mut Delay>,
        method: &'static str,
    ) -> Option<(&'s Arc<I>, &'d mut Delay)> {
        let Some(delay) = delay else {
            let err = SocketError::NullDelay {
                socket: self.socket.full_name().to_string(),
                method,
            };
            self.ctx.report(&err, &self.socket);
            return None;
        };
        let Some(imp) = self.imp.as_ref() else {
            let err = SocketError::MissingImplementation {
                socket: self.socket.full_name().to_string(),
            };
            self.ctx.report(&err, &self.socket);
            return None;
        };
        Some((imp, delay))
    }
}

impl<Pr: Protocol> ImpEndpoint<dyn BlockingTransport<Pr>> {
    pub async fn b_transport(&self, payload: &mut Pr::Payload, delay: Option<&mut Delay>) {
        if let Some((imp, delay)) = self.checked(delay, "b_transport") {
            self.ctx.metrics().record_forward_call();
            imp.b_transport(payload, delay).await;
        }
    }
}

impl<Pr: Protocol> ImpEndpoint<dyn ForwardTransport<Pr>> {
    pub fn nb_transport_fw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: Option<&mut Delay>,
    ) -> SyncStatus {
        match self.checked(delay, "nb_transport_fw") {
            Some((imp, delay)) => {
                self.ctx.metrics().record_forward_call();
                imp.nb_transport_fw(payload, phase, delay)
            }
            None => SyncStatus::Completed,
        }
    }
}

impl<Pr: Protocol> ImpEndpoint<dyn BackwardTransport<Pr>> {
    pub fn nb_transport_bw(
        &self,
        payload: &mut Pr::Payload,
        phase: &mut Pr::Phase,
        delay: Option<&mut Delay>,
    ) -> SyncStatus {
        match self.checked(delay, "nb_transport_bw") {
            Some((imp, delay)) => {
                self.ctx.metrics().record_backward_call();
                imp.nb_transport_bw(payload, phase, delay)
            }
            None => SyncStatus::Completed,
        }
    }
}

impl<I: ?Sized> fmt::Debug for ImpEndpoint<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImpEndpoint")
            .field("socket", &self.socket.full_name())
            .field("has_implementation", &self.imp.is_some())
            .finish()
    }
}
