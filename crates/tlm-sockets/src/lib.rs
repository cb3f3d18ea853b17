//! # TLM Sockets
//!
//! Transaction-level socket fabric: typed initiator and target sockets,
//! pass-through relays for hierarchical models, and the reverse channel
//! derived automatically for non-blocking connections.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure connection logic, no user calls
//!   - `SocketShape`: role, path and kind of a socket
//!   - `validate`: the connection validator
//!   - `Endpoint` / `SocketId`: identity and link bookkeeping
//!   - `Slot` / `Hop`: relay cells resolved lazily into routes
//!   - `SocketConfig`: limits and logging switches, with a builder
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `Socket`: driving port shared by all eight variants
//!   - `BlockingTransport`, `ForwardTransport`, `BackwardTransport`: driven
//!     ports implemented by user components
//!   - `ErrorReporter`: where rejected connections and bad calls end up
//!
//! - **Sockets Layer** (`sockets/`): The eight socket variants
//!   - Terminators: `BlockingInitiatorSocket`, `BlockingTargetSocket`,
//!     `NbInitiatorSocket`, `NbTargetSocket`
//!   - Pass-through: `BlockingPassthroughInitiatorSocket`,
//!     `BlockingPassthroughTargetSocket`, `NbPassthroughInitiatorSocket`,
//!     `NbPassthroughTargetSocket`
//!
//! ## Invariants
//!
//! - Payload and phase types of connected sockets always agree; a mismatch
//!   does not compile.
//! - A rejected `connect` changes nothing on either socket.
//! - A chain with N pass-through sockets between initiator and target
//!   resolves in exactly N+1 hops, in both directions.
//! - Every non-blocking target reached by a successful chain has its
//!   reverse channel bound to that chain's initiator.
//!
//! ## Usage Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tlm_sockets::prelude::*;
//!
//! let ctx = SocketContext::default();
//! let top = ComponentId::root("top")?;
//!
//! let init = NbInitiatorSocket::<BaseProtocol<Vec<u8>>>::new(
//!     SocketId::new(&top.child("cpu")?, "isock")?,
//!     Arc::new(MyMaster::default()),
//!     &ctx,
//! );
//! let target = NbTargetSocket::new(
//!     SocketId::new(&top.child("mem")?, "tsock")?,
//!     Arc::new(MyMemory::default()),
//!     &ctx,
//! );
//!
//! init.connect(&target)?;
//! let status = init.nb_transport_fw(&mut payload, &mut phase, Some(&mut delay))?;
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod sockets;

// Re-exports for convenience
pub use domain::{
    validate, ConnectionState, Endpoint, Kind, Path, Rejection, Role, SocketConfig,
    SocketConfigBuilder, SocketId, SocketShape, Verdict,
};
pub use error::{ids, ConfigError, SocketError};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{BackwardTransport, BlockingTransport, ErrorReporter, ForwardTransport, Socket};
pub use sockets::{
    BlockingInitiatorSocket, BlockingPassthroughInitiatorSocket, BlockingPassthroughTargetSocket,
    BlockingTargetSocket, ImpSource, NbInitiatorSocket, NbPassthroughInitiatorSocket,
    NbPassthroughTargetSocket, NbTargetSocket, SocketContext, SocketRef,
};

/// Everything needed to declare, connect and drive sockets.
pub mod prelude {
    pub use crate::ports::{BackwardTransport, BlockingTransport, ForwardTransport, Socket};
    pub use crate::sockets::*;
    pub use crate::{SocketConfig, SocketError, SocketId};
    pub use async_trait::async_trait;
    pub use tlm_types::{BaseProtocol, ComponentId, Delay, Phase, Protocol, SyncStatus};
}
