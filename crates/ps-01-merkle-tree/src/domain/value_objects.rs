//! # Value Objects
//!
//! Constants, configuration and the persisted snapshot summary.

use serde::{Deserialize, Serialize};

use super::hash_function::HashFunction;
use super::merkle_hash::MerkleHash;

/// Hash of the filler node that pads an odd-sized layer.
///
/// The largest 256-bit value. Filler nodes are always placed on the right of
/// their sibling, whatever the hash function.
pub const NIL_HASH: &str = "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// Batches smaller than this are built sequentially.
pub const PARALLEL_THRESHOLD: usize = 4;

/// Configuration for tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MerkleConfig {
    /// Hash function for leaves and internal nodes (default: keccak-256).
    pub hash_fn: HashFunction,
}

impl MerkleConfig {
    /// Identity hashing, so hashes in assertions stay readable.
    pub fn for_testing() -> Self {
        Self {
            hash_fn: HashFunction::Identity,
        }
    }
}

/// Configuration for the snapshot cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of built trees kept in memory (default: 1000).
    ///
    /// Least recently used trees are evicted first. Zero is treated as one.
    pub max_cached_trees: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_cached_trees: 1000,
        }
    }
}

impl CacheConfig {
    /// A small cache for exercising eviction.
    pub fn for_testing() -> Self {
        Self {
            max_cached_trees: 3,
        }
    }
}

/// The canonical identifiers persisted for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub root_hash: MerkleHash,
    pub depth: u32,
    pub hash_fn: HashFunction,
    pub leaf_count: usize,
}
