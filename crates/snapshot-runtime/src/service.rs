//! # Snapshot Service
//!
//! Fronts the snapshot cache: builds trees on demand from the holder source
//! and records every built snapshot's summary in the store.

use std::sync::Arc;

use ps_01_merkle_tree::{
    HolderBalanceSource, MerkleTree, SnapshotCache, SnapshotError, SnapshotStore,
    SnapshotStoreError, SnapshotSummary, WalletProof,
};
use shared_types::{Address, SnapshotId};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::RuntimeConfig;

/// Service-level failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Store(#[from] SnapshotStoreError),
}

pub struct SnapshotService {
    cache: SnapshotCache,
    source: Arc<dyn HolderBalanceSource>,
    store: Arc<dyn SnapshotStore>,
}

impl SnapshotService {
    pub fn new(
        config: &RuntimeConfig,
        source: Arc<dyn HolderBalanceSource>,
        store: Arc<dyn SnapshotStore>,
    ) -> Self {
        let hash_fn = config.merkle.hash_fn;
        if !hash_fn.is_cryptographic() {
            warn!(
                hash_fn = %hash_fn,
                "Snapshot roots built with a non-cryptographic hash function are not claimable on-chain"
            );
        }
        Self {
            cache: SnapshotCache::new(&config.cache, &config.merkle),
            source,
            store,
        }
    }

    /// The tree for `snapshot`, building and recording it if needed.
    pub fn tree(&self, snapshot: &SnapshotId) -> Result<Arc<MerkleTree>, ServiceError> {
        let tree = self.cache.get_or_build(snapshot, self.source.as_ref())?;
        if self.store.get_summary(snapshot)?.is_none() {
            let summary = tree.summary();
            info!(
                snapshot = %snapshot,
                root = %summary.root_hash,
                depth = summary.depth,
                leaf_count = summary.leaf_count,
                "Recorded snapshot summary"
            );
            self.store.put_summary(*snapshot, summary)?;
        }
        Ok(tree)
    }

    pub fn summary(&self, snapshot: &SnapshotId) -> Result<SnapshotSummary, ServiceError> {
        Ok(self.tree(snapshot)?.summary())
    }

    /// Proof for `address`; `Ok(None)` when it is not a holder.
    pub fn proof_for(
        &self,
        snapshot: &SnapshotId,
        address: &Address,
    ) -> Result<Option<WalletProof>, ServiceError> {
        Ok(self.tree(snapshot)?.proof_for(address))
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }
}
