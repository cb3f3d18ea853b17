//! Sockets Layer
//!
//! The eight socket variants, grouped by path:
//!
//! - **Terminators** (`terminator`): the ends of a chain. Initiators start
//!   calls; targets own the implementation that executes them.
//! - **Pass-through** (`passthrough`): relays that forward calls to whatever
//!   they are connected to and never own an implementation.
//!
//! Wiring goes through `binder`, which applies the connection validator and
//! derives the reverse channel of non-blocking connections.

mod binder;
pub mod context;
pub mod imp;
pub mod passthrough;
pub mod socket_ref;
pub mod terminator;

pub use context::SocketContext;
pub use imp::{BackwardImp, BlockingImp, ForwardImp, ImpEndpoint, ImpSource};
pub use passthrough::{
    BlockingPassthroughInitiatorSocket, BlockingPassthroughTargetSocket,
    NbPassthroughInitiatorSocket, NbPassthroughTargetSocket,
};
pub use socket_ref::SocketRef;
pub use terminator::{
    BlockingInitiatorSocket, BlockingTargetSocket, NbInitiatorSocket, NbTargetSocket,
};
