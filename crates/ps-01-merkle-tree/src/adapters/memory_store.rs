use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::SnapshotId;

use crate::domain::{
    HolderSourceError, PayoutAccountBalance, SnapshotStoreError, SnapshotSummary,
};
use crate::ports::{HolderBalanceSource, SnapshotStore};

/// In-memory implementation of SnapshotStore for testing and the CLI
pub struct InMemorySnapshotStore {
    summaries: RwLock<HashMap<SnapshotId, SnapshotSummary>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            summaries: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.summaries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.read().is_empty()
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn put_summary(
        &self,
        snapshot: SnapshotId,
        summary: SnapshotSummary,
    ) -> Result<(), SnapshotStoreError> {
        let mut summaries = self.summaries.write();
        match summaries.get(&snapshot) {
            Some(existing) if *existing != summary => Err(SnapshotStoreError::Conflict(snapshot)),
            Some(_) => Ok(()),
            None => {
                summaries.insert(snapshot, summary);
                Ok(())
            }
        }
    }

    fn get_summary(
        &self,
        snapshot: &SnapshotId,
    ) -> Result<Option<SnapshotSummary>, SnapshotStoreError> {
        Ok(self.summaries.read().get(snapshot).cloned())
    }
}

/// In-memory implementation of HolderBalanceSource backed by fixed lists
pub struct InMemoryHolderSource {
    holders: RwLock<HashMap<SnapshotId, Vec<PayoutAccountBalance>>>,
}

impl InMemoryHolderSource {
    pub fn new() -> Self {
        Self {
            holders: RwLock::new(HashMap::new()),
        }
    }

    /// Register (or replace) the holder list for `snapshot`.
    pub fn insert(&self, snapshot: SnapshotId, holders: Vec<PayoutAccountBalance>) {
        self.holders.write().insert(snapshot, holders);
    }
}

impl Default for InMemoryHolderSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HolderBalanceSource for InMemoryHolderSource {
    fn fetch_balances(
        &self,
        snapshot: &SnapshotId,
    ) -> Result<Vec<PayoutAccountBalance>, HolderSourceError> {
        self.holders
            .read()
            .get(snapshot)
            .cloned()
            .ok_or(HolderSourceError::NotFound(*snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HashFunction, MerkleHash};
    use shared_types::Address;

    fn snapshot(block: u64) -> SnapshotId {
        SnapshotId::new(1, Address::from_low_u64_be(0xBEEF), block)
    }

    fn summary(root: &str) -> SnapshotSummary {
        SnapshotSummary {
            root_hash: MerkleHash::new(root),
            depth: 2,
            hash_fn: HashFunction::Keccak256,
            leaf_count: 4,
        }
    }

    #[test]
    fn test_put_get_summary() {
        let store = InMemorySnapshotStore::new();
        assert!(store.get_summary(&snapshot(1)).unwrap().is_none());

        store.put_summary(snapshot(1), summary("0xaa")).unwrap();
        assert_eq!(store.get_summary(&snapshot(1)).unwrap(), Some(summary("0xaa")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_identical_put_is_idempotent() {
        let store = InMemorySnapshotStore::new();
        store.put_summary(snapshot(1), summary("0xaa")).unwrap();
        store.put_summary(snapshot(1), summary("0xaa")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_conflicting_put_rejected() {
        let store = InMemorySnapshotStore::new();
        store.put_summary(snapshot(1), summary("0xaa")).unwrap();
        assert_eq!(
            store.put_summary(snapshot(1), summary("0xbb")),
            Err(SnapshotStoreError::Conflict(snapshot(1)))
        );
    }

    #[test]
    fn test_holder_source_lookup() {
        let source = InMemoryHolderSource::new();
        let holders = vec![PayoutAccountBalance::new(Address::from_low_u64_be(1), 5u64)];
        source.insert(snapshot(7), holders.clone());

        assert_eq!(source.fetch_balances(&snapshot(7)).unwrap(), holders);
        assert_eq!(
            source.fetch_balances(&snapshot(8)),
            Err(HolderSourceError::NotFound(snapshot(8)))
        );
    }
}
