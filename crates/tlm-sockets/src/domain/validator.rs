//! Connection validator
//!
//! Single decision procedure reused by every `connect`: given the consumer's
//! shape and the provider's shape, accept or reject with a reason.
//!
//! Checks run in a fixed order:
//! 1. `NotConnectable` - the consumer is a terminator-target
//! 2. `WrongKind` - blocking vs. non-blocking mismatch
//! 3. `WrongDirection` - the provider cannot serve this consumer's role
//!
//! Accepted pairings (same kind):
//!
//! | consumer                 | accepted providers                                   |
//! |--------------------------|------------------------------------------------------|
//! | initiator                | pass-through initiator, pass-through target, target  |
//! | pass-through initiator   | pass-through initiator, pass-through target, target  |
//! | pass-through target      | pass-through target, target                          |
//! | target                   | none                                                 |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::shape::{Path, Role, SocketShape};

/// Why a pairing was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// Role pairing invalid.
    WrongDirection,
    /// Blocking vs. non-blocking mismatch.
    WrongKind,
    /// Consumer never accepts `connect`.
    NotConnectable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongDirection => write!(f, "wrong direction"),
            Self::WrongKind => write!(f, "blocking/non-blocking mismatch"),
            Self::NotConnectable => write!(f, "termination socket"),
        }
    }
}

/// Outcome of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_accept(self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Decide whether `consumer.connect(provider)` is a valid forward edge.
pub fn validate(consumer: SocketShape, provider: SocketShape) -> Verdict {
    if consumer.is_terminator_target() {
        return Verdict::Reject(Rejection::NotConnectable);
    }

    if consumer.kind != provider.kind {
        return Verdict::Reject(Rejection::WrongKind);
    }

    // A terminator-initiator only originates calls; nothing connects to it.
    if provider.role == Role::Initiator && provider.path == Path::Terminator {
        return Verdict::Reject(Rejection::WrongDirection);
    }

    // Pass-through targets relay toward a target only.
    if consumer.role == Role::Target && provider.role != Role::Target {
        return Verdict::Reject(Rejection::WrongDirection);
    }

    Verdict::Accept
}
