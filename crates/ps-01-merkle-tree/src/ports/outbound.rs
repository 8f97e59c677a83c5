//! # Outbound Ports (Driven Ports)
//!
//! Collaborators the snapshot engine depends on but does not implement:
//! where holder balances come from and where summaries are kept.

use shared_types::SnapshotId;

use crate::domain::{HolderSourceError, PayoutAccountBalance, SnapshotStoreError, SnapshotSummary};

/// Supplies the holder list for a snapshot (chain indexer, file, fixture).
pub trait HolderBalanceSource: Send + Sync {
    fn fetch_balances(&self, snapshot: &SnapshotId)
        -> Result<Vec<PayoutAccountBalance>, HolderSourceError>;
}

/// Persists the identifiers of built snapshots.
pub trait SnapshotStore: Send + Sync {
    /// Store the summary for `snapshot`.
    ///
    /// Re-storing an identical summary is a no-op; a different summary for
    /// the same snapshot is a [`SnapshotStoreError::Conflict`].
    fn put_summary(
        &self,
        snapshot: SnapshotId,
        summary: SnapshotSummary,
    ) -> Result<(), SnapshotStoreError>;

    fn get_summary(&self, snapshot: &SnapshotId)
        -> Result<Option<SnapshotSummary>, SnapshotStoreError>;
}
