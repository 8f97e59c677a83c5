//! # Domain Errors
//!
//! Error types for snapshot tree construction and configuration.
//!
//! Lookup misses are not errors: proof queries for an address that is not in
//! the snapshot return `None`.

use shared_types::{Address, SnapshotId};
use thiserror::Error;

use super::merkle_hash::MerkleHash;

/// Fatal errors raised while building a snapshot tree.
///
/// Any of these aborts snapshot creation; no partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// No holders were supplied.
    #[error("Cannot build a Merkle tree from an empty holder set")]
    EmptyLeaves,

    /// The same wallet address appears more than once.
    #[error("Address collision: {address} appears {count} times")]
    AddressCollision { address: Address, count: usize },

    /// Distinct holders produced the same leaf hash.
    #[error("Hash collision: {count} holders hash to {hash}")]
    HashCollision { hash: MerkleHash, count: usize },
}

/// Errors raised while loading configuration or persisted settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A persisted hash-function code or name is not recognised.
    #[error("Unknown hash function: {code}")]
    UnknownHashFunction { code: String },

    /// A configuration value could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Failure fetching holder balances for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolderSourceError {
    #[error("No holder data for snapshot {0}")]
    NotFound(SnapshotId),

    #[error("Holder source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed holder data: {0}")]
    Malformed(String),
}

/// Failure persisting or loading snapshot summaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotStoreError {
    #[error("Snapshot store unavailable: {0}")]
    Unavailable(String),

    #[error("Snapshot {0} already has a different summary")]
    Conflict(SnapshotId),
}

/// Failure producing a tree for a snapshot through the cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Holder source error: {0}")]
    Source(#[from] HolderSourceError),

    #[error("Merkle build error: {0}")]
    Build(#[from] MerkleError),
}
