//! # Reverse Channel
//!
//! The backward binder wires a non-blocking provider's reverse egress to
//! the consumer that connected to it. These scenarios check that backward
//! calls find their way home through hierarchies and that a reverse channel
//! is never silently stolen by a second consumer.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tlm_sockets::ids;
    use tlm_sockets::prelude::*;

    use crate::fixtures::{recording_ctx, sid, Master, Memory, Proto};

    #[test]
    fn test_parallel_chains_keep_their_own_initiators() {
        let (ctx, reporter) = recording_ctx();
        let (m0, m1) = (Arc::new(Master::default()), Arc::new(Master::default()));
        let i0 = NbInitiatorSocket::<Proto>::new(sid("top.cpu0", "isock"), m0.clone(), &ctx);
        let i1 = NbInitiatorSocket::<Proto>::new(sid("top.cpu1", "isock"), m1.clone(), &ctx);
        let p0 = NbPassthroughTargetSocket::<Proto>::new(sid("top.bank0", "in"), &ctx);
        let p1 = NbPassthroughTargetSocket::<Proto>::new(sid("top.bank1", "in"), &ctx);
        let t0 = NbTargetSocket::<Proto>::new(sid("top.bank0.ram", "tsock"), Arc::new(Memory::default()), &ctx);
        let t1 = NbTargetSocket::<Proto>::new(sid("top.bank1.ram", "tsock"), Arc::new(Memory::default()), &ctx);

        i0.connect(&p0).unwrap();
        p0.connect(&t0).unwrap();
        p1.connect(&t1).unwrap();
        i1.connect(&p1).unwrap();

        let mut payload = Vec::new();
        t1.nb_transport_bw(&mut payload, &mut Phase::BeginResp, Some(&mut Delay::zero()))
            .unwrap();
        t1.nb_transport_bw(&mut payload, &mut Phase::BeginResp, Some(&mut Delay::zero()))
            .unwrap();
        t0.nb_transport_bw(&mut payload, &mut Phase::BeginResp, Some(&mut Delay::zero()))
            .unwrap();

        assert_eq!(m0.calls(), 1);
        assert_eq!(m1.calls(), 2);
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_second_consumer_cannot_steal_relay() {
        let (ctx, reporter) = recording_ctx();
        let first = Arc::new(Master::default());
        let i0 = NbInitiatorSocket::<Proto>::new(sid("top.cpu0", "isock"), first.clone(), &ctx);
        let i1 = NbInitiatorSocket::<Proto>::new(sid("top.cpu1", "isock"), Arc::new(Master::default()), &ctx);
        let relay = NbPassthroughTargetSocket::<Proto>::new(sid("top.sub", "in"), &ctx);

        i0.connect(&relay).unwrap();
        let err = i1.connect(&relay).unwrap_err();

        assert_eq!(
            err,
            SocketError::AlreadyConnected {
                socket: "top.sub.in".to_string(),
                existing: "top.cpu0.isock".to_string(),
            }
        );
        assert_eq!(reporter.count(ids::ALREADY_CONNECTED), 1);
        assert_eq!(reporter.reports()[0].origin.full_name(), "top.cpu1");
        assert!(!i1.is_connected());
        assert!(i1.forward_hops().is_err());

        relay
            .nb_transport_bw(&mut Vec::new(), &mut Phase::BeginResp, Some(&mut Delay::zero()))
            .unwrap();
        assert_eq!(first.calls(), 1);
    }

    #[test]
    fn test_repeated_connect_keeps_reverse_channel() {
        let (ctx, reporter) = recording_ctx();
        let master = Arc::new(Master::default());
        let init = NbInitiatorSocket::<Proto>::new(sid("top.cpu", "isock"), master.clone(), &ctx);
        let target = NbTargetSocket::<Proto>::new(sid("top.mem", "tsock"), Arc::new(Memory::default()), &ctx);

        init.connect(&target).unwrap();
        init.connect(&target).unwrap();

        assert_eq!(target.backward_hops(), Ok(1));
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_initiator_without_backward_implementation() {
        let (ctx, reporter) = recording_ctx();
        let init = NbInitiatorSocket::<Proto>::new(sid("top.cpu", "isock"), ImpSource::none(), &ctx);
        let target = NbTargetSocket::<Proto>::new(sid("top.mem", "tsock"), Arc::new(Memory::default()), &ctx);
        assert_eq!(reporter.count(ids::NO_IMP), 1);

        init.connect(&target).unwrap();
        let mut phase = Phase::BeginResp;
        let status = target
            .nb_transport_bw(&mut Vec::new(), &mut phase, Some(&mut Delay::zero()))
            .unwrap();

        assert_eq!(status, SyncStatus::Completed);
        assert_eq!(phase, Phase::BeginResp);
        assert_eq!(reporter.count(ids::NO_IMP), 2);
        assert_eq!(reporter.reports()[1].origin.full_name(), "top.cpu");
    }

    #[test]
    fn test_blocking_connect_binds_no_reverse_channel() {
        let (ctx, _) = recording_ctx();
        let init = BlockingInitiatorSocket::<Proto>::new(sid("top.cpu", "isock"), &ctx);
        let relay = NbPassthroughTargetSocket::<Proto>::new(sid("top.sub", "in"), &ctx);

        assert!(init.connect(&relay).is_err());
        assert!(matches!(
            relay.backward_hops(),
            Err(SocketError::Unbound { .. })
        ));
    }
}
