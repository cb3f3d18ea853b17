//! Domain Layer - Pure connection logic
//!
//! This layer contains:
//! - Socket shapes (role, path, kind)
//! - The connection validator
//! - Endpoint identity and bookkeeping
//! - Relay slots and chain resolution
//! - Configuration
//!
//! RULES:
//! - No async code
//! - No calls into user implementations

pub mod config;
pub mod endpoint;
pub mod link;
pub mod shape;
pub mod validator;

pub use config::{SocketConfig, SocketConfigBuilder, MAX_RELAY_HOPS_CEILING};
pub use endpoint::{ConnectionState, Endpoint, SocketId};
pub use link::{Hop, Route, Slot};
pub use shape::{Kind, Path, Role, SocketShape};
pub use validator::{validate, Rejection, Verdict};
