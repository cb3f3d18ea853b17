//! Relay slots: the materialised form of connection edges.
//!
//! Every socket that can pass a call onward owns a `Slot`. Binding a slot
//! stores one `Hop`: either a relay to another socket's slot or the terminal
//! endpoint that executes the call. Slots are shared cells, so a chain can be
//! bound in any order and is resolved lazily when a call is made.
//!
//! ## Invariants
//!
//! - A resolved route of N relays has exactly N+1 hops.
//! - Resolution stops after `limit` hops; a cycle can never spin forever.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::SocketError;

/// One step along a chain.
pub enum Hop<T> {
    /// Continue at another socket's slot.
    Relay(Arc<Slot<T>>),
    /// Chain ends here.
    Terminal(Arc<T>),
}

impl<T> Clone for Hop<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Relay(slot) => Self::Relay(Arc::clone(slot)),
            Self::Terminal(t) => Self::Terminal(Arc::clone(t)),
        }
    }
}

impl<T> Hop<T> {
    /// Identity comparison.
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Relay(a), Self::Relay(b)) => Arc::ptr_eq(a, b),
            (Self::Terminal(a), Self::Terminal(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

struct Binding<T> {
    hop: Hop<T>,
    bound_by: String,
}

/// Shared cell holding the next hop of a chain.
pub struct Slot<T> {
    owner: String,
    binding: RwLock<Option<Binding<T>>>,
}

/// A resolved chain.
pub struct Route<T> {
    pub terminal: Arc<T>,
    pub hops: usize,
}

impl<T> Slot<T> {
    pub fn new(owner: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            owner: owner.into(),
            binding: RwLock::new(None),
        })
    }

    /// Full name of the socket owning this slot.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn is_bound(&self) -> bool {
        self.binding.read().is_some()
    }

    /// Name of the socket whose `connect` bound this slot.
    pub fn bound_by(&self) -> Option<String> {
        self.binding.read().as_ref().map(|b| b.bound_by.clone())
    }

    /// Whether this slot already points somewhere other than `hop`.
    pub fn conflicts_with(&self, hop: &Hop<T>) -> Option<String> {
        match self.binding.read().as_ref() {
            Some(binding) if !binding.hop.same_as(hop) => Some(binding.bound_by.clone()),
            _ => None,
        }
    }

    pub fn bind(&self, hop: Hop<T>, bound_by: &str) {
        *self.binding.write() = Some(Binding {
            hop,
            bound_by: bound_by.to_string(),
        });
    }

    fn next(&self) -> Option<Hop<T>> {
        self.binding.read().as_ref().map(|b| b.hop.clone())
    }

    /// Walk the chain to its terminal.
    ///
    /// Returns `Unbound` naming the first slot with no binding, or
    /// `HopLimitExceeded` once more than `limit` hops were taken.
    pub fn resolve(&self, limit: usize) -> Result<Route<T>, SocketError> {
        let mut at = self.owner.clone();
        let mut next = self.next();
        let mut hops = 1;

        loop {
            match next {
                None => return Err(SocketError::Unbound { socket: at }),
                Some(Hop::Terminal(terminal)) => return Ok(Route { terminal, hops }),
                Some(Hop::Relay(slot)) => {
                    if hops >= limit {
                        return Err(SocketError::HopLimitExceeded {
                            socket: self.owner.clone(),
                            limit,
                        });
                    }
                    hops += 1;
                    at = slot.owner.clone();
                    next = slot.next();
                }
            }
        }
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("owner", &self.owner)
            .field("bound_by", &self.bound_by())
            .finish()
    }
}
