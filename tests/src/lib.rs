//! # Payout Snapshot Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Holder-list generators
//! ├── benchmarks/       # Criterion benchmarks per crate
//! │   └── ps_01_merkle_tree.rs
//! └── integration/      # Cross-crate flows
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p snapshot-tests
//!
//! # Benchmarks
//! cargo bench -p snapshot-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
