//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - `Socket`, used by assembly code
//! - Driven Ports (outbound) - transport implementations and error reporting

pub mod inbound;
pub mod outbound;

pub use inbound::Socket;
pub use outbound::{BackwardTransport, BlockingTransport, DynReporter, ErrorReporter, ForwardTransport};
