//! # Integration Test Flows
//!
//! Holder data goes in through the runtime's holder source, trees are
//! built through the cache, summaries land in the store, and every proof a
//! claimant receives must verify against the stored root.
//!
//! ## Flows Tested:
//!
//! 1. **File → Service → Store**: a holder file yields a stored summary whose
//!    root every served proof reproduces
//! 2. **Cache eviction**: an evicted snapshot rebuilds to the same root
//! 3. **Parallel construction**: batch builds agree with the cache
//! 4. **Order independence**: shuffled holder files give the same root

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use ps_01_merkle_tree::{
        build_snapshots_parallel, CacheConfig, HashFunction, InMemoryHolderSource,
        InMemorySnapshotStore, MerkleConfig, MerkleTree, SnapshotBatch, SnapshotCache,
        SnapshotStore,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_types::{Address, SnapshotId};
    use snapshot_runtime::{JsonFileHolderSource, RuntimeConfig, SnapshotService};
    use tempfile::NamedTempFile;

    use crate::fixtures::{holders_json, random_holders, sequential_holders, shuffled};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn snapshot(block: u64) -> SnapshotId {
        SnapshotId::new(1, Address::from_low_u64_be(0x70CE), block)
    }

    fn write_holders(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    // =============================================================================
    // FLOW 1: FILE → SERVICE → STORE
    // =============================================================================

    #[test]
    fn test_file_to_stored_root_to_verified_proofs() {
        let mut rng = StdRng::seed_from_u64(7);
        let holders = random_holders(300, &mut rng);
        let file = write_holders(&holders_json(&holders));

        let store = Arc::new(InMemorySnapshotStore::new());
        let service = SnapshotService::new(
            &RuntimeConfig::default(),
            Arc::new(JsonFileHolderSource::new(file.path())),
            store.clone(),
        );

        let tree = service.tree(&snapshot(1)).unwrap();
        let stored = store.get_summary(&snapshot(1)).unwrap().unwrap();
        assert_eq!(&stored.root_hash, tree.root_hash());
        assert_eq!(stored.leaf_count, 300);
        assert_eq!(stored.depth, 9);

        for holder in &holders {
            let proof = service.proof_for(&snapshot(1), &holder.address).unwrap().unwrap();
            assert_eq!(&proof.wallet_balance, holder);
            assert!(proof.verify(&stored.root_hash, stored.hash_fn));
        }
        assert_eq!(service.cache().stats().misses, 1);
    }

    // =============================================================================
    // FLOW 2: CACHE EVICTION AND REBUILD
    // =============================================================================

    #[test]
    fn test_evicted_snapshot_rebuilds_identically() {
        let source = InMemoryHolderSource::new();
        for block in 1..=4 {
            source.insert(snapshot(block), sequential_holders(block * 10));
        }
        let cache = SnapshotCache::new(&CacheConfig::for_testing(), &MerkleConfig::default());

        let first_root = cache.get_or_build(&snapshot(1), &source).unwrap().root_hash().clone();
        for block in 2..=4 {
            cache.get_or_build(&snapshot(block), &source).unwrap();
        }
        assert!(!cache.contains(&snapshot(1)));

        let rebuilt = cache.get_or_build(&snapshot(1), &source).unwrap();
        assert_eq!(rebuilt.root_hash(), &first_root);
        assert_eq!(cache.stats().evictions, 2);
    }

    // =============================================================================
    // FLOW 3: PARALLEL CONSTRUCTION
    // =============================================================================

    #[test]
    fn test_parallel_batches_agree_with_cache() {
        let mut rng = StdRng::seed_from_u64(11);
        let source = InMemoryHolderSource::new();
        let batches: Vec<SnapshotBatch> = (1..=8)
            .map(|block| {
                let holders = random_holders(50 + block as usize, &mut rng);
                source.insert(snapshot(block), holders.clone());
                SnapshotBatch {
                    snapshot: snapshot(block),
                    holders,
                }
            })
            .collect();

        let cache = SnapshotCache::new(&CacheConfig::default(), &MerkleConfig::default());
        for built in build_snapshots_parallel(batches, HashFunction::Keccak256) {
            let parallel = built.result.unwrap();
            let cached = cache.get_or_build(&built.snapshot, &source).unwrap();
            assert_eq!(parallel.root_hash(), cached.root_hash());
        }
    }

    // =============================================================================
    // FLOW 4: ORDER INDEPENDENCE THROUGH THE FILE FORMAT
    // =============================================================================

    #[test]
    fn test_shuffled_files_produce_same_root() {
        let mut rng = StdRng::seed_from_u64(23);
        let holders = random_holders(97, &mut rng);
        let config = RuntimeConfig {
            merkle: MerkleConfig::default(),
            cache: CacheConfig::default(),
        };

        let roots: Vec<_> = (0..4)
            .map(|_| {
                let file = write_holders(&holders_json(&shuffled(&holders, &mut rng)));
                let service = SnapshotService::new(
                    &config,
                    Arc::new(JsonFileHolderSource::new(file.path())),
                    Arc::new(InMemorySnapshotStore::new()),
                );
                service.summary(&snapshot(5)).unwrap().root_hash
            })
            .collect();

        let direct = MerkleTree::build(holders, HashFunction::Keccak256).unwrap();
        assert!(roots.iter().all(|root| root == direct.root_hash()));
    }
}
