//! Socket shape: the three independent tags that classify every socket.
//!
//! A shape is `(role, path, kind)`:
//! - `role`: who originates the forward call (`Initiator`) vs. who serves it (`Target`)
//! - `path`: whether the socket owns an implementation (`Terminator`) or only relays (`PassThrough`)
//! - `kind`: single suspending call (`Blocking`) vs. status-returning call with a reverse channel (`NonBlocking`)

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Initiator,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Path {
    Terminator,
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Blocking,
    NonBlocking,
}

/// Classification of a socket variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocketShape {
    pub role: Role,
    pub path: Path,
    pub kind: Kind,
}

impl SocketShape {
    pub const BLOCKING_INITIATOR: Self = Self::new(Role::Initiator, Path::Terminator, Kind::Blocking);
    pub const BLOCKING_TARGET: Self = Self::new(Role::Target, Path::Terminator, Kind::Blocking);
    pub const NB_INITIATOR: Self = Self::new(Role::Initiator, Path::Terminator, Kind::NonBlocking);
    pub const NB_TARGET: Self = Self::new(Role::Target, Path::Terminator, Kind::NonBlocking);
    pub const BLOCKING_PASSTHROUGH_INITIATOR: Self =
        Self::new(Role::Initiator, Path::PassThrough, Kind::Blocking);
    pub const BLOCKING_PASSTHROUGH_TARGET: Self =
        Self::new(Role::Target, Path::PassThrough, Kind::Blocking);
    pub const NB_PASSTHROUGH_INITIATOR: Self =
        Self::new(Role::Initiator, Path::PassThrough, Kind::NonBlocking);
    pub const NB_PASSTHROUGH_TARGET: Self =
        Self::new(Role::Target, Path::PassThrough, Kind::NonBlocking);

    pub const fn new(role: Role, path: Path, kind: Kind) -> Self {
        Self { role, path, kind }
    }

    /// All eight variants.
    pub const fn all() -> [Self; 8] {
        [
            Self::BLOCKING_INITIATOR,
            Self::BLOCKING_TARGET,
            Self::NB_INITIATOR,
            Self::NB_TARGET,
            Self::BLOCKING_PASSTHROUGH_INITIATOR,
            Self::BLOCKING_PASSTHROUGH_TARGET,
            Self::NB_PASSTHROUGH_INITIATOR,
            Self::NB_PASSTHROUGH_TARGET,
        ]
    }

    /// A terminator-target is a pure sink and never accepts `connect`.
    pub fn is_terminator_target(&self) -> bool {
        self.role == Role::Target && self.path == Path::Terminator
    }

    /// Stable variant name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match (self.kind, self.path, self.role) {
            (Kind::Blocking, Path::Terminator, Role::Initiator) => "b_initiator_socket",
            (Kind::Blocking, Path::Terminator, Role::Target) => "b_target_socket",
            (Kind::NonBlocking, Path::Terminator, Role::Initiator) => "nb_initiator_socket",
            (Kind::NonBlocking, Path::Terminator, Role::Target) => "nb_target_socket",
            (Kind::Blocking, Path::PassThrough, Role::Initiator) => {
                "b_passthrough_initiator_socket"
            }
            (Kind::Blocking, Path::PassThrough, Role::Target) => "b_passthrough_target_socket",
            (Kind::NonBlocking, Path::PassThrough, Role::Initiator) => {
                "nb_passthrough_initiator_socket"
            }
            (Kind::NonBlocking, Path::PassThrough, Role::Target) => {
                "nb_passthrough_target_socket"
            }
        }
    }
}

impl fmt::Display for SocketShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
