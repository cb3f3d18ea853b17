//! Endpoint: identity and connection bookkeeping shared by every socket.
//!
//! The endpoint records at most one provider link. It does not own any
//! transport machinery; sockets hold their slots and implementation next
//! to it.

use std::fmt;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tlm_types::{validate_segment, ComponentId, IdentityError, PATH_SEPARATOR};

use super::shape::SocketShape;

/// Identity of a socket: owning component plus local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocketId {
    parent: ComponentId,
    name: String,
    full_name: String,
}

impl SocketId {
    pub fn new(parent: &ComponentId, name: &str) -> Result<Self, IdentityError> {
        validate_segment(name)?;
        Ok(Self {
            parent: parent.clone(),
            name: name.to_string(),
            full_name: format!("{}{}{}", parent.full_name(), PATH_SEPARATOR, name),
        })
    }

    /// Component that owns this socket; used as report origin.
    pub fn parent(&self) -> &ComponentId {
        &self.parent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl fmt::Display for SocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Unconnected,
    Connected,
}

/// Result of comparing a requested provider with the recorded one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LinkCheck {
    /// No provider recorded yet.
    Fresh,
    /// Already linked to this very provider.
    Same,
    /// Linked to a different provider.
    Conflict(SocketId),
}

/// Base state of every socket.
pub struct Endpoint {
    id: SocketId,
    shape: SocketShape,
    provider: RwLock<Option<SocketId>>,
}

impl Endpoint {
    pub fn new(id: SocketId, shape: SocketShape) -> Self {
        Self {
            id,
            shape,
            provider: RwLock::new(None),
        }
    }

    pub fn id(&self) -> &SocketId {
        &self.id
    }

    pub fn shape(&self) -> SocketShape {
        self.shape
    }

    pub fn state(&self) -> ConnectionState {
        if self.provider.read().is_some() {
            ConnectionState::Connected
        } else {
            ConnectionState::Unconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    /// Provider recorded by a successful `connect`.
    pub fn provider(&self) -> Option<SocketId> {
        self.provider.read().clone()
    }

    pub(crate) fn check_link(&self, provider: &SocketId) -> LinkCheck {
        match self.provider.read().as_ref() {
            None => LinkCheck::Fresh,
            Some(existing) if existing == provider => LinkCheck::Same,
            Some(existing) => LinkCheck::Conflict(existing.clone()),
        }
    }

    pub(crate) fn record_link(&self, provider: SocketId) {
        *self.provider.write() = Some(provider);
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("id", &self.id.full_name)
            .field("shape", &self.shape)
            .field("provider", &self.provider.read().as_ref().map(SocketId::full_name))
            .finish()
    }
}
