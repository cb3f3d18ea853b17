//! Connection establishment
//!
//! Shared by every consumer socket's `connect`:
//!
//! 1. ask the validator, then refuse a socket connecting to itself; a
//!    rejection is reported, returned, and changes nothing
//! 2. compare with the provider already recorded: the same provider is a
//!    no-op, a different one is `AlreadyConnected`
//! 3. for non-blocking pairs, make sure the provider's reverse egress is not
//!    already wired to another consumer
//! 4. only then mutate: record the link, bind the consumer's forward slot
//!    and, for non-blocking pairs, bind the provider's reverse egress back to
//!    the consumer (the backward binder)

use std::sync::Arc;

use tlm_telemetry::log_socket_event;
use tlm_types::Protocol;

use super::context::SocketContext;
use super::imp::{BackwardImp, BlockingImp, ForwardImp};
use super::socket_ref::SocketRef;
use crate::domain::endpoint::LinkCheck;
use crate::domain::{validate, Endpoint, Hop, Rejection, Slot, Verdict};
use crate::error::SocketError;

/// What the consumer contributes to a connection.
pub(crate) enum ConsumerWiring<'a, Pr: Protocol> {
    Blocking {
        forward: &'a Arc<Slot<BlockingImp<Pr>>>,
    },
    NonBlocking {
        forward: &'a Arc<Slot<ForwardImp<Pr>>>,
        /// Where backward calls entering from the provider continue.
        reverse_ingress: Hop<BackwardImp<Pr>>,
    },
}

/// Report and return a refused connection. Nothing has been mutated yet.
fn reject(
    consumer: &Endpoint,
    ctx: &SocketContext,
    provider: &Endpoint,
    error: SocketError,
) -> Result<(), SocketError> {
    ctx.metrics().record_connect(false);
    log_socket_event!(
        warn,
        consumer.id(),
        "connect rejected",
        provider = %provider.id(),
        error = %error
    );
    Err(ctx.fail(error, consumer.id()))
}

fn mismatch(consumer: &Endpoint, provider: &Endpoint, reason: Rejection) -> SocketError {
    SocketError::from_rejection(
        consumer.id().full_name(),
        provider.id().full_name(),
        reason,
    )
}

/// `connect` on a terminator target: the validator's verdict is reported
/// and returned.
pub(crate) fn refuse<Pr: Protocol>(
    consumer: &Endpoint,
    ctx: &SocketContext,
    provider: SocketRef<'_, Pr>,
) -> Result<(), SocketError> {
    let provider_ep = provider.endpoint();
    let reason = match validate(consumer.shape(), provider_ep.shape()) {
        Verdict::Reject(reason) => reason,
        Verdict::Accept => Rejection::NotConnectable,
    };
    reject(consumer, ctx, provider_ep, mismatch(consumer, provider_ep, reason))
}

pub(crate) fn establish<Pr: Protocol>(
    consumer: &Endpoint,
    ctx: &SocketContext,
    wiring: ConsumerWiring<'_, Pr>,
    provider: SocketRef<'_, Pr>,
) -> Result<(), SocketError> {
    let provider_ep = provider.endpoint();
    let consumer_id = consumer.id();
    let provider_id = provider_ep.id();

    if let Verdict::Reject(reason) = validate(consumer.shape(), provider_ep.shape()) {
        return reject(consumer, ctx, provider_ep, mismatch(consumer, provider_ep, reason));
    }

    if std::ptr::eq(consumer, provider_ep) {
        return reject(
            consumer,
            ctx,
            provider_ep,
            SocketError::InvalidTopology {
                socket: consumer_id.full_name().to_string(),
            },
        );
    }

    match consumer.check_link(provider_id) {
        LinkCheck::Fresh => {}
        LinkCheck::Same => {
            log_socket_event!(
                warn,
                consumer_id,
                "already connected to this provider; ignoring",
                provider = %provider_id
            );
            return Ok(());
        }
        LinkCheck::Conflict(existing) => {
            return reject(
                consumer,
                ctx,
                provider_ep,
                SocketError::AlreadyConnected {
                    socket: consumer_id.full_name().to_string(),
                    existing: existing.full_name().to_string(),
                },
            );
        }
    }

    let bound_by = consumer_id.full_name();
    match wiring {
        ConsumerWiring::Blocking { forward } => {
            let Some(ingress) = provider.blocking_ingress() else {
                return reject(
                    consumer,
                    ctx,
                    provider_ep,
                    mismatch(consumer, provider_ep, Rejection::WrongKind),
                );
            };
            consumer.record_link(provider_id.clone());
            forward.bind(ingress, bound_by);
        }
        ConsumerWiring::NonBlocking {
            forward,
            reverse_ingress,
        } => {
            let (Some(ingress), Some(egress)) = (provider.forward_ingress(), provider.reverse_egress())
            else {
                return reject(
                    consumer,
                    ctx,
                    provider_ep,
                    mismatch(consumer, provider_ep, Rejection::WrongKind),
                );
            };
            if let Some(existing) = egress.conflicts_with(&reverse_ingress) {
                return reject(
                    consumer,
                    ctx,
                    provider_ep,
                    SocketError::AlreadyConnected {
                        socket: provider_id.full_name().to_string(),
                        existing,
                    },
                );
            }
            consumer.record_link(provider_id.clone());
            forward.bind(ingress, bound_by);
            egress.bind(reverse_ingress, bound_by);
        }
    }

    ctx.metrics().record_connect(true);
    if ctx.config().log_connections {
        log_socket_event!(
            debug,
            consumer_id,
            "connected",
            provider = %provider_id,
            kind = ?consumer.shape().kind
        );
    }
    Ok(())
}
