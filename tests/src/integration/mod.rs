//! # Integration Tests
//!
//! Flows that cross crate boundaries: holder ingestion, the runtime service,
//! the cache and parallel construction.

pub mod flows;
