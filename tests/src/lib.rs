//! # TLM Socket Fabric Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Sample target, initiator and socket factories
//! │
//! └── integration/      # Cross-crate scenarios
//!     ├── chains.rs         # Relay chains, binding order, hop counts
//!     ├── topology.rs       # All 64 socket pairings against the validator
//!     ├── reverse_channel.rs# Backward binder across hierarchies
//!     └── runtime.rs        # Concurrency, metrics, configuration limits
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tlm-tests
//!
//! # By category
//! cargo test -p tlm-tests integration::chains::
//! cargo test -p tlm-tests integration::topology::
//!
//! # Benchmarks
//! cargo bench -p tlm-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
