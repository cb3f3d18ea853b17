//! Inbound Ports (Driving Ports)
//!
//! The API assembly code drives: every socket variant implements `Socket`,
//! which exposes its endpoint and the `connect` operation.

use tlm_types::Protocol;

use crate::domain::{ConnectionState, Endpoint};
use crate::error::SocketError;
use crate::sockets::SocketRef;

/// Common surface of all eight socket variants (Driving Port)
pub trait Socket<Pr: Protocol>: Send + Sync {
    /// Identity and connection bookkeeping.
    fn endpoint(&self) -> &Endpoint;

    /// Classify this socket as one of the eight variants.
    fn socket_ref(&self) -> SocketRef<'_, Pr>;

    /// Connect to an already-classified provider.
    ///
    /// On rejection the error is reported through the socket's reporter,
    /// returned, and no state changes.
    fn connect_ref(&self, provider: SocketRef<'_, Pr>) -> Result<(), SocketError>;

    /// Connect this socket to `provider`.
    fn connect<S>(&self, provider: &S) -> Result<(), SocketError>
    where
        S: Socket<Pr> + ?Sized,
        Self: Sized,
    {
        self.connect_ref(provider.socket_ref())
    }

    fn full_name(&self) -> &str {
        self.endpoint().id().full_name()
    }

    fn state(&self) -> ConnectionState {
        self.endpoint().state()
    }

    fn is_connected(&self) -> bool {
        self.endpoint().is_connected()
    }

    /// Whether a transport implementation is bound. Pass-through sockets
    /// never own one.
    fn has_implementation(&self) -> bool {
        false
    }
}
