//! # Runtime Behaviour
//!
//! Concurrency of blocking calls, metrics accounting, and the limits set
//! through `SocketConfig`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tlm_sockets::prelude::*;
    use tlm_sockets::{ids, Metrics, MetricsSnapshot, SocketConfigBuilder};
    use tlm_telemetry::TracingReporter;

    use crate::fixtures::{recording_ctx, sid, Master, Memory, Proto};

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_blocking_calls_share_one_chain() {
        let (ctx, reporter) = recording_ctx();
        let memory = Arc::new(Memory::tagged(1));
        let init = Arc::new(BlockingInitiatorSocket::<Proto>::new(sid("top.cpu", "isock"), &ctx));
        let relay = BlockingPassthroughTargetSocket::<Proto>::new(sid("top.sub", "in"), &ctx);
        let target = BlockingTargetSocket::<Proto>::new(sid("top.sub.ram", "tsock"), memory.clone(), &ctx);
        init.connect(&relay).unwrap();
        relay.connect(&target).unwrap();

        let mut handles = Vec::new();
        for _ in 0..32 {
            let init = Arc::clone(&init);
            handles.push(tokio::spawn(async move {
                let mut payload = Vec::new();
                let mut delay = Delay::zero();
                init.b_transport(&mut payload, Some(&mut delay)).await.unwrap();
                (payload, delay)
            }));
        }

        for handle in handles {
            let (payload, delay) = handle.await.unwrap();
            assert_eq!(payload, vec![1]);
            assert_eq!(delay, Delay::from_nanos(10));
        }
        assert_eq!(memory.calls(), 32);
        assert!(reporter.is_empty());
    }

    // =============================================================================
    // METRICS
    // =============================================================================

    #[test]
    fn test_metrics_track_connects_and_calls() {
        let (ctx, _) = recording_ctx();
        let metrics = Arc::new(Metrics::new());
        let ctx = ctx.with_metrics(metrics.clone());

        let init = NbInitiatorSocket::<Proto>::new(sid("top.cpu", "isock"), Arc::new(Master::default()), &ctx);
        let target = NbTargetSocket::<Proto>::new(sid("top.mem", "tsock"), Arc::new(Memory::default()), &ctx);
        let wrong = BlockingInitiatorSocket::<Proto>::new(sid("top.dma", "isock"), &ctx);

        init.connect(&target).unwrap();
        assert!(wrong.connect(&target).is_err());

        let mut payload = Vec::new();
        init.nb_transport_fw(&mut payload, &mut Phase::BeginReq, Some(&mut Delay::zero()))
            .unwrap();
        target
            .nb_transport_bw(&mut payload, &mut Phase::BeginResp, Some(&mut Delay::zero()))
            .unwrap();

        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                connects_accepted: 1,
                connects_rejected: 1,
                forward_calls: 1,
                backward_calls: 1,
                errors_reported: 1,
            }
        );
    }

    #[test]
    fn test_tracing_reporter_counts_by_id() {
        let reporter = Arc::new(TracingReporter::new());
        let ctx = SocketContext::new(reporter.clone());
        let a = BlockingTargetSocket::<Proto>::new(sid("top.a", "tsock"), Arc::new(Memory::default()), &ctx);
        let b = BlockingTargetSocket::<Proto>::new(sid("top.b", "tsock"), ImpSource::none(), &ctx);

        assert!(a.connect(&b).is_err());

        assert_eq!(reporter.count(ids::NO_IMP), 1);
        assert_eq!(reporter.count(ids::INVALID_TOPOLOGY), 1);
        assert_eq!(reporter.total(), 2);
    }

    // =============================================================================
    // CONFIGURATION
    // =============================================================================

    #[tokio::test]
    async fn test_relay_cycle_hits_hop_limit() {
        let (ctx, reporter) = recording_ctx();
        let config = SocketConfigBuilder::new().max_relay_hops(8).build().unwrap();
        let ctx = ctx.with_config(config);

        let a = BlockingPassthroughInitiatorSocket::<Proto>::new(sid("top.a", "out"), &ctx);
        let b = BlockingPassthroughInitiatorSocket::<Proto>::new(sid("top.b", "out"), &ctx);
        a.connect(&b).unwrap();
        b.connect(&a).unwrap();

        let expected = SocketError::HopLimitExceeded {
            socket: "top.a.out".to_string(),
            limit: 8,
        };
        assert_eq!(a.forward_hops(), Err(expected.clone()));

        let err = a
            .b_transport(&mut Vec::new(), Some(&mut Delay::zero()))
            .await
            .unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(reporter.count(ids::HOP_LIMIT), 1);
    }

    #[test]
    fn test_long_chain_within_limit() {
        let (ctx, _) = recording_ctx();
        let config = SocketConfig::from_json(r#"{"max_relay_hops": 4, "log_connections": false}"#).unwrap();
        assert!(!config.log_connections);
        let ctx = ctx.with_config(config);

        let chain = crate::integration::chains::NbChain::new(3, 0, &ctx);
        chain.connect_all().unwrap();
        assert_eq!(chain.init.forward_hops(), Ok(4));

        let longer = crate::integration::chains::NbChain::new(4, 0, &ctx);
        longer.connect_all().unwrap();
        assert!(matches!(
            longer.init.forward_hops(),
            Err(SocketError::HopLimitExceeded { limit: 4, .. })
        ));
    }
}
