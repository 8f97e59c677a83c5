//! # Inbound Ports (Driving Ports)
//!
//! Read-only proof queries against a built snapshot.

use shared_types::Address;

use crate::domain::{
    MerkleTree, PathSegment, PayoutAccountBalance, SnapshotSummary, WalletProof,
};

/// Proof API for one snapshot.
///
/// Implementations must be safe to share across threads; none of these
/// operations mutate the snapshot.
pub trait SnapshotProofApi: Send + Sync {
    /// Root hash, depth and hash function for persistence.
    fn summary(&self) -> SnapshotSummary;

    /// Root-to-leaf inclusion path for an exact `(address, balance)` pair.
    ///
    /// `None` when the pair is not part of the snapshot.
    fn path_to(&self, balance: &PayoutAccountBalance) -> Option<Vec<PathSegment>>;

    /// Proof payload for a wallet, or `None` if it is not a holder.
    fn proof_for(&self, address: &Address) -> Option<WalletProof>;

    /// Whether `proof` reproduces this snapshot's root.
    fn verify(&self, proof: &WalletProof) -> bool;
}

impl SnapshotProofApi for MerkleTree {
    fn summary(&self) -> SnapshotSummary {
        MerkleTree::summary(self)
    }

    fn path_to(&self, balance: &PayoutAccountBalance) -> Option<Vec<PathSegment>> {
        MerkleTree::path_to(self, balance)
    }

    fn proof_for(&self, address: &Address) -> Option<WalletProof> {
        MerkleTree::proof_for(self, address)
    }

    fn verify(&self, proof: &WalletProof) -> bool {
        MerkleTree::verify(self, proof)
    }
}
