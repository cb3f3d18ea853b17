//! Closed classification of the eight socket variants.
//!
//! `connect` takes a `SocketRef` rather than a trait object so the binder
//! can ask a provider exactly what it offers: a forward ingress for the
//! consumer's slot and, for non-blocking providers, the reverse egress slot
//! the backward binder fills in.

use std::sync::Arc;

use tlm_types::Protocol;

use super::imp::{BackwardImp, BlockingImp, ForwardImp};
use super::passthrough::{
    BlockingPassthroughInitiatorSocket, BlockingPassthroughTargetSocket,
    NbPassthroughInitiatorSocket, NbPassthroughTargetSocket,
};
use super::terminator::{
    BlockingInitiatorSocket, BlockingTargetSocket, NbInitiatorSocket, NbTargetSocket,
};
use crate::domain::{Endpoint, Hop, SocketShape, Slot};
use crate::ports::Socket;

/// Borrowed view of one socket, tagged with its variant.
pub enum SocketRef<'a, Pr: Protocol> {
    BlockingInitiator(&'a BlockingInitiatorSocket<Pr>),
    BlockingTarget(&'a BlockingTargetSocket<Pr>),
    NbInitiator(&'a NbInitiatorSocket<Pr>),
    NbTarget(&'a NbTargetSocket<Pr>),
    BlockingPassthroughInitiator(&'a BlockingPassthroughInitiatorSocket<Pr>),
    BlockingPassthroughTarget(&'a BlockingPassthroughTargetSocket<Pr>),
    NbPassthroughInitiator(&'a NbPassthroughInitiatorSocket<Pr>),
    NbPassthroughTarget(&'a NbPassthroughTargetSocket<Pr>),
}

impl<Pr: Protocol> Clone for SocketRef<'_, Pr> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Pr: Protocol> Copy for SocketRef<'_, Pr> {}

impl<'a, Pr: Protocol> SocketRef<'a, Pr> {
    pub fn endpoint(&self) -> &'a Endpoint {
        match *self {
            Self::BlockingInitiator(s) => s.endpoint(),
            Self::BlockingTarget(s) => s.endpoint(),
            Self::NbInitiator(s) => s.endpoint(),
            Self::NbTarget(s) => s.endpoint(),
            Self::BlockingPassthroughInitiator(s) => s.endpoint(),
            Self::BlockingPassthroughTarget(s) => s.endpoint(),
            Self::NbPassthroughInitiator(s) => s.endpoint(),
            Self::NbPassthroughTarget(s) => s.endpoint(),
        }
    }

    pub fn shape(&self) -> SocketShape {
        self.endpoint().shape()
    }

    /// Where a blocking consumer's forward slot should point.
    pub(crate) fn blocking_ingress(&self) -> Option<Hop<BlockingImp<Pr>>> {
        match *self {
            Self::BlockingTarget(s) => Some(Hop::Terminal(Arc::clone(s.imp()))),
            Self::BlockingPassthroughInitiator(s) => Some(Hop::Relay(Arc::clone(s.forward_slot()))),
            Self::BlockingPassthroughTarget(s) => Some(Hop::Relay(Arc::clone(s.forward_slot()))),
            _ => None,
        }
    }

    /// Where a non-blocking consumer's forward slot should point.
    pub(crate) fn forward_ingress(&self) -> Option<Hop<ForwardImp<Pr>>> {
        match *self {
            Self::NbTarget(s) => Some(Hop::Terminal(Arc::clone(s.fw_imp()))),
            Self::NbPassthroughInitiator(s) => Some(Hop::Relay(Arc::clone(s.forward_slot()))),
            Self::NbPassthroughTarget(s) => Some(Hop::Relay(Arc::clone(s.forward_slot()))),
            _ => None,
        }
    }

    /// Slot the backward binder points at the consumer's reverse ingress.
    pub(crate) fn reverse_egress(&self) -> Option<&'a Arc<Slot<BackwardImp<Pr>>>> {
        match *self {
            Self::NbTarget(s) => Some(s.reverse_slot()),
            Self::NbPassthroughInitiator(s) => Some(s.reverse_slot()),
            Self::NbPassthroughTarget(s) => Some(s.reverse_slot()),
            _ => None,
        }
    }
}

impl<Pr: Protocol> std::fmt::Debug for SocketRef<'_, Pr> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.shape().type_name(), self.endpoint().id())
    }
}
