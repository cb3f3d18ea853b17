//! # TLM Types Crate
//!
//! This crate contains the vocabulary shared by the socket fabric: component
//! identity, the `Protocol` type family, the opaque `Delay`, the phase and
//! synchronization enums of the base protocol, and the `ErrorReporter`
//! contract every socket reports through.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Opaque collaborators**: `Delay` and payloads are carried, never
//!   interpreted. The fabric only checks a delay for presence.
//! - **Report, don't unwind**: Structured errors go to an `ErrorReporter`;
//!   whether they become fatal is the reporter's decision.

pub mod entities;
pub mod errors;
pub mod protocol;
pub mod reporting;

pub use entities::*;
pub use errors::*;
pub use protocol::{BaseProtocol, Protocol};
pub use reporting::{DynReporter, ErrorReporter, ReportedError};
