//! # Protocol Type Family
//!
//! A `Protocol` bundles the payload and phase types carried over a socket.
//! Two sockets can only be passed to `connect` when they share the same
//! `Protocol`, so payload/phase mismatches are compile errors rather than
//! connection-time errors.

use std::fmt;
use std::marker::PhantomData;

use crate::entities::Phase;

/// Payload/phase type family of a socket.
pub trait Protocol: Send + Sync + 'static {
    /// Transaction object carried by forward and backward calls.
    type Payload: Send + Sync + 'static;
    /// Handshake phase carried by non-blocking calls.
    type Phase: Send + Sync + 'static;
}

/// Protocol over an arbitrary payload `T` and phase `P`.
pub struct BaseProtocol<T, P = Phase> {
    _marker: PhantomData<fn() -> (T, P)>,
}

impl<T, P> Protocol for BaseProtocol<T, P>
where
    T: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    type Payload = T;
    type Phase = P;
}

impl<T, P> fmt::Debug for BaseProtocol<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BaseProtocol<{}, {}>",
            std::any::type_name::<T>(),
            std::any::type_name::<P>()
        )
    }
}
