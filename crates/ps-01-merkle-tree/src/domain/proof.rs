//! # Inclusion Proofs
//!
//! Path segments, the per-holder proof payload and root recomputation.
//!
//! Paths are ordered root-to-leaf, the order the payout contract consumes.
//! Verification therefore walks them in reverse, from the leaf upward.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::balance::PayoutAccountBalance;
use super::hash_function::HashFunction;
use super::merkle_hash::MerkleHash;
use super::node::{combine_hashes, Node};

/// One level of an inclusion path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Hash of the node beside the path at this level.
    pub sibling_hash: MerkleHash,
    /// `true` when the sibling is the left child (the path went right).
    pub is_left: bool,
}

/// Proof payload served to claimants and the payout contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletProof {
    pub wallet_balance: PayoutAccountBalance,
    /// Sibling hashes, root-to-leaf.
    pub proof: Vec<MerkleHash>,
}

impl WalletProof {
    pub fn from_segments(wallet_balance: PayoutAccountBalance, segments: &[PathSegment]) -> Self {
        Self {
            wallet_balance,
            proof: segments.iter().map(|s| s.sibling_hash.clone()).collect(),
        }
    }

    /// Recompute the root from the balance and the sibling hashes alone,
    /// ordering each pair the same way the tree was built: a filler sibling
    /// on the right, otherwise the numerically smaller hash on the left.
    pub fn compute_root(&self, hash_fn: HashFunction) -> MerkleHash {
        let leaf_hash = self.wallet_balance.leaf_hash(hash_fn);
        self.proof.iter().rev().fold(leaf_hash, |current, sibling| {
            if sibling == Node::nil_hash() {
                return combine_hashes(&current, sibling, hash_fn);
            }
            match sibling.compare_numeric(&current) {
                Ordering::Less => combine_hashes(sibling, &current, hash_fn),
                Ordering::Equal | Ordering::Greater => combine_hashes(&current, sibling, hash_fn),
            }
        })
    }

    /// Whether the proof reproduces `expected_root`.
    pub fn verify(&self, expected_root: &MerkleHash, hash_fn: HashFunction) -> bool {
        self.compute_root(hash_fn) == *expected_root
    }
}

/// Recompute the root from a leaf hash and its root-to-leaf path.
pub fn compute_root_from_path(
    leaf_hash: &MerkleHash,
    path: &[PathSegment],
    hash_fn: HashFunction,
) -> MerkleHash {
    path.iter().rev().fold(leaf_hash.clone(), |current, segment| {
        if segment.is_left {
            combine_hashes(&segment.sibling_hash, &current, hash_fn)
        } else {
            combine_hashes(&current, &segment.sibling_hash, hash_fn)
        }
    })
}

/// Whether `path` leads from `leaf_hash` to `expected_root`.
pub fn verify_path(
    leaf_hash: &MerkleHash,
    path: &[PathSegment],
    expected_root: &MerkleHash,
    hash_fn: HashFunction,
) -> bool {
    compute_root_from_path(leaf_hash, path, hash_fn) == *expected_root
}
