//! # Snapshot Cache
//!
//! Bounded LRU cache of built trees, keyed by snapshot.
//!
//! Proof requests for a payout arrive in bursts against the same few
//! snapshots. A built tree is immutable, so it is shared as an
//! `Arc<MerkleTree>` and readers never hold the cache lock while walking it.
//!
//! Trees are built outside the lock. Two concurrent misses for the same
//! snapshot may both build; the trees are identical and the later insert
//! simply replaces the earlier one.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use shared_types::SnapshotId;
use tracing::debug;

use super::errors::SnapshotError;
use super::hash_function::HashFunction;
use super::tree::MerkleTree;
use super::value_objects::{CacheConfig, MerkleConfig};
use crate::ports::HolderBalanceSource;

/// Cache counters for monitoring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
}

struct CacheState {
    trees: LruCache<SnapshotId, Arc<MerkleTree>>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

/// Thread-safe LRU cache of snapshot trees.
pub struct SnapshotCache {
    state: Mutex<CacheState>,
    merkle: MerkleConfig,
}

impl SnapshotCache {
    /// Create a cache building trees per `merkle`.
    pub fn new(config: &CacheConfig, merkle: &MerkleConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_cached_trees).unwrap_or(NonZeroUsize::MIN);
        Self {
            state: Mutex::new(CacheState {
                trees: LruCache::new(capacity),
                hits: 0,
                misses: 0,
                evictions: 0,
            }),
            merkle: *merkle,
        }
    }

    pub fn hash_fn(&self) -> HashFunction {
        self.merkle.hash_fn
    }

    /// Cached tree for `snapshot`, marking it most recently used.
    pub fn get(&self, snapshot: &SnapshotId) -> Option<Arc<MerkleTree>> {
        let mut state = self.state.lock();
        match state.trees.get(snapshot).cloned() {
            Some(tree) => {
                state.hits += 1;
                Some(tree)
            }
            None => {
                state.misses += 1;
                None
            }
        }
    }

    /// Insert a built tree, evicting the least recently used one if full.
    pub fn insert(&self, snapshot: SnapshotId, tree: MerkleTree) -> Arc<MerkleTree> {
        let tree = Arc::new(tree);
        let mut state = self.state.lock();
        if let Some((evicted, _)) = state.trees.push(snapshot, Arc::clone(&tree)) {
            if evicted != snapshot {
                state.evictions += 1;
                debug!(snapshot = %evicted, "Evicted snapshot tree from cache");
            }
        }
        tree
    }

    /// Cached tree for `snapshot`, fetching holders from `source` and
    /// building on a miss.
    ///
    /// # Errors
    ///
    /// Source failures and build failures; nothing is cached on error.
    pub fn get_or_build(
        &self,
        snapshot: &SnapshotId,
        source: &dyn HolderBalanceSource,
    ) -> Result<Arc<MerkleTree>, SnapshotError> {
        if let Some(tree) = self.get(snapshot) {
            return Ok(tree);
        }

        debug!(snapshot = %snapshot, "Snapshot cache miss, building tree");
        let holders = source.fetch_balances(snapshot)?;
        let tree = MerkleTree::with_config(holders, &self.merkle)?;
        Ok(self.insert(*snapshot, tree))
    }

    pub fn contains(&self, snapshot: &SnapshotId) -> bool {
        self.state.lock().trees.contains(snapshot)
    }

    pub fn len(&self) -> usize {
        self.state.lock().trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached tree. Counters are kept.
    pub fn clear(&self) {
        self.state.lock().trees.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
            entries: state.trees.len(),
            capacity: state.trees.cap().get(),
        }
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default(), &MerkleConfig::default())
    }
}
