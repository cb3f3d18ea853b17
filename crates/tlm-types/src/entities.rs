//! # Core Entities
//!
//! Identity, time and handshake vocabulary shared by every socket.
//!
//! ## Clusters
//!
//! - **Identity**: `ComponentId` (hierarchical, dot-separated)
//! - **Time**: `Delay` (opaque virtual-time annotation)
//! - **Handshake**: `Phase`, `SyncStatus`

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::IdentityError;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Hierarchy separator used in full names.
pub const PATH_SEPARATOR: char = '.';

/// Identity of a component in the assembly hierarchy.
///
/// Stored as the full dotted path (`"top.env.agent"`). Every segment is
/// non-empty and free of the separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId {
    path: String,
}

impl ComponentId {
    /// Create a top-level component.
    pub fn root(name: &str) -> Result<Self, IdentityError> {
        validate_segment(name)?;
        Ok(Self {
            path: name.to_string(),
        })
    }

    /// Parse a full dotted path.
    pub fn parse(path: &str) -> Result<Self, IdentityError> {
        if path.split(PATH_SEPARATOR).any(str::is_empty) {
            return Err(IdentityError::EmptySegment {
                path: path.to_string(),
            });
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Create a child of this component.
    pub fn child(&self, name: &str) -> Result<Self, IdentityError> {
        validate_segment(name)?;
        Ok(Self {
            path: format!("{}{}{}", self.path, PATH_SEPARATOR, name),
        })
    }

    /// Full dotted path.
    pub fn full_name(&self) -> &str {
        &self.path
    }

    /// Last path segment.
    pub fn name(&self) -> &str {
        self.path
            .rsplit(PATH_SEPARATOR)
            .next()
            .unwrap_or(self.path.as_str())
    }

    /// Enclosing component, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        self.path.rfind(PATH_SEPARATOR).map(|idx| Self {
            path: self.path[..idx].to_string(),
        })
    }

    /// Number of segments (a root has depth 1).
    pub fn depth(&self) -> usize {
        self.path.split(PATH_SEPARATOR).count()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Validate a single hierarchy segment.
pub fn validate_segment(name: &str) -> Result<(), IdentityError> {
    if name.is_empty() {
        return Err(IdentityError::EmptySegment {
            path: name.to_string(),
        });
    }
    if name.contains(PATH_SEPARATOR) {
        return Err(IdentityError::SeparatorInName {
            name: name.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// CLUSTER B: TIME
// =============================================================================

/// Virtual-time annotation threaded through transport calls.
///
/// The fabric never inspects the value; it only distinguishes a present
/// delay from an absent one (`Option<&mut Delay>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Delay {
    value: Duration,
}

impl Delay {
    pub fn new(value: Duration) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_nanos(nanos: u64) -> Self {
        Self::new(Duration::from_nanos(nanos))
    }

    pub fn get(&self) -> Duration {
        self.value
    }

    pub fn set(&mut self, value: Duration) {
        self.value = value;
    }

    /// Advance the annotation (saturating).
    pub fn incr(&mut self, by: Duration) {
        self.value = self.value.saturating_add(by);
    }
}

// =============================================================================
// CLUSTER C: HANDSHAKE
// =============================================================================

/// Phases of the base non-blocking protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Uninitialized,
    BeginReq,
    EndReq,
    BeginResp,
    EndResp,
}

/// Status returned by a non-blocking transport call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncStatus {
    /// Accepted; completion arrives through a later call.
    Accepted,
    /// Synchronization point reached; the callee updated the phase.
    Updated,
    /// Exchange finished.
    Completed,
}

impl SyncStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "ACCEPTED"),
            Self::Updated => write!(f, "UPDATED"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}
