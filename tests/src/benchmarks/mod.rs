//! # Snapshot Benchmarks
//!
//! Criterion benchmarks, registered from `benches/snapshot_benchmarks.rs`.

pub mod ps_01_merkle_tree;
