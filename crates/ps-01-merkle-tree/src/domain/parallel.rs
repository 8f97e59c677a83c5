//! # Parallel Snapshot Construction
//!
//! Builds trees for many independent snapshots at once using rayon.
//!
//! A payout run may snapshot several token contracts or chains at the same
//! block. Each tree depends only on its own holder list, so the builds are
//! a plain parallel map. Small batches stay sequential.

use rayon::prelude::*;
use shared_types::SnapshotId;

use super::balance::PayoutAccountBalance;
use super::errors::MerkleError;
use super::hash_function::HashFunction;
use super::tree::MerkleTree;
use super::value_objects::PARALLEL_THRESHOLD;

/// Holder list for one snapshot.
#[derive(Clone, Debug)]
pub struct SnapshotBatch {
    pub snapshot: SnapshotId,
    pub holders: Vec<PayoutAccountBalance>,
}

/// Outcome of building one snapshot.
#[derive(Debug)]
pub struct SnapshotBuild {
    pub snapshot: SnapshotId,
    pub result: Result<MerkleTree, MerkleError>,
}

/// Build every batch, returning results in input order.
///
/// A failing snapshot does not affect the others.
pub fn build_snapshots_parallel(
    batches: Vec<SnapshotBatch>,
    hash_fn: HashFunction,
) -> Vec<SnapshotBuild> {
    if batches.len() < PARALLEL_THRESHOLD {
        batches
            .into_iter()
            .map(|batch| build_single(batch, hash_fn))
            .collect()
    } else {
        batches
            .into_par_iter()
            .map(|batch| build_single(batch, hash_fn))
            .collect()
    }
}

fn build_single(batch: SnapshotBatch, hash_fn: HashFunction) -> SnapshotBuild {
    SnapshotBuild {
        snapshot: batch.snapshot,
        result: MerkleTree::build(batch.holders, hash_fn),
    }
}
