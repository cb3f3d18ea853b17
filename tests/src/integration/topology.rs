//! # Connection Topology
//!
//! Every ordered pair of the eight socket variants is connected once and
//! checked against the validator. Accepted pairs must leave the consumer
//! connected; rejected pairs must be reported exactly once and leave both
//! sockets untouched.

#[cfg(test)]
mod tests {
    use tlm_sockets::prelude::*;
    use tlm_sockets::{ids, validate, Rejection, SocketShape, Verdict};

    use crate::fixtures::{make_socket, recording_ctx};

    // =============================================================================
    // ALL PAIRS
    // =============================================================================

    #[test]
    fn test_all_pairs_follow_validator() {
        let mut accepted = 0;

        for consumer_shape in SocketShape::all() {
            for provider_shape in SocketShape::all() {
                let (ctx, reporter) = recording_ctx();
                let consumer = make_socket(consumer_shape, "top.consumer", &ctx);
                let provider = make_socket(provider_shape, "top.provider", &ctx);

                let result = consumer.connect_ref(provider.socket_ref());
                let verdict = validate(consumer_shape, provider_shape);

                assert_eq!(
                    result.is_ok(),
                    verdict.is_accept(),
                    "{consumer_shape} -> {provider_shape}"
                );
                match verdict {
                    Verdict::Accept => {
                        accepted += 1;
                        assert!(consumer.is_connected());
                        assert!(reporter.is_empty());
                    }
                    Verdict::Reject(reason) => {
                        assert!(!consumer.is_connected());
                        assert!(!provider.is_connected());
                        assert_eq!(reporter.len(), 1);
                        let expected = match reason {
                            Rejection::NotConnectable => ids::INVALID_TOPOLOGY,
                            _ => ids::TYPE_MISMATCH,
                        };
                        assert_eq!(reporter.reports()[0].id, expected);
                        assert_eq!(reporter.reports()[0].origin.full_name(), "top.consumer");
                    }
                }
            }
        }

        assert_eq!(accepted, 16);
    }

    #[test]
    fn test_terminator_targets_never_connect() {
        for shape in [SocketShape::BLOCKING_TARGET, SocketShape::NB_TARGET] {
            for provider_shape in SocketShape::all() {
                let (ctx, reporter) = recording_ctx();
                let target = make_socket(shape, "top.mem", &ctx);
                let provider = make_socket(provider_shape, "top.other", &ctx);

                let err = target.connect_ref(provider.socket_ref()).unwrap_err();
                assert!(matches!(err, SocketError::InvalidTopology { .. }));
                assert_eq!(reporter.count(ids::INVALID_TOPOLOGY), 1);
            }
        }
    }

    #[test]
    fn test_type_mismatch_message_names_both_sockets() {
        let (ctx, _) = recording_ctx();
        let consumer = make_socket(SocketShape::NB_INITIATOR, "top.cpu", &ctx);
        let provider = make_socket(SocketShape::BLOCKING_TARGET, "top.mem", &ctx);

        let err = consumer.connect_ref(provider.socket_ref()).unwrap_err();
        let message = err.to_string();

        assert!(message.starts_with("type mismatch in connect"));
        assert!(message.contains("top.cpu.nb_initiator_socket"));
        assert!(message.contains("top.mem.b_target_socket"));
    }

    #[test]
    fn test_rejection_does_not_block_later_valid_connect() {
        let (ctx, reporter) = recording_ctx();
        let consumer = make_socket(SocketShape::BLOCKING_INITIATOR, "top.cpu", &ctx);
        let wrong = make_socket(SocketShape::NB_TARGET, "top.nbmem", &ctx);
        let right = make_socket(SocketShape::BLOCKING_TARGET, "top.mem", &ctx);

        assert!(consumer.connect_ref(wrong.socket_ref()).is_err());
        assert!(consumer.connect_ref(right.socket_ref()).is_ok());

        assert_eq!(reporter.len(), 1);
        assert_eq!(
            consumer.endpoint().provider().map(|p| p.parent().full_name().to_string()),
            Some("top.mem".to_string())
        );
    }
}
