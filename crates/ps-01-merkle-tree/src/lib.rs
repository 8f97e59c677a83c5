//! # Payout Snapshot Merkle Tree (ps-01)
//!
//! Builds a canonical Merkle tree over a token's holder snapshot so that a
//! payout contract can check a claimant's balance against a single stored
//! root.
//!
//! Each leaf is a `(wallet address, balance)` pair, encoded as two 32-byte
//! ABI words and hashed. The root is a deterministic function of the holder
//! set: input order never changes it.
//!
//! ## Responsibilities
//!
//! - Build the tree, rejecting empty input and address or hash collisions
//! - Produce the root hash and depth to persist with the snapshot
//! - Serve root-to-leaf inclusion paths and per-wallet proofs
//! - Serialize the full tree as an audit document
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement | Location |
//! |-----------|-------------|----------|
//! | Order independence | Sort leaves by hash, order every pair by hash | tree.rs, node.rs |
//! | No ambiguous leaves | Address and hash collision checks | tree.rs |
//! | Uniform depth | Per-layer `Nil` padding | tree.rs |
//! | Proof validity | Every indexed leaf's path recomputes the root | proof.rs |
//! | Stack safety | Trampolined leaf indexing, iterative descent | trampoline.rs, tree.rs |
//! | Bounded cache | LRU eviction when full | cache.rs |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): hashing, tree construction, proofs, cache
//! - **Ports Layer** (`ports/`): `SnapshotProofApi` inbound; holder source and
//!   summary store outbound
//! - **Adapters Layer** (`adapters/`): in-memory port implementations
//!
//! ## Example
//!
//! ```
//! use ps_01_merkle_tree::{HashFunction, MerkleTree, PayoutAccountBalance};
//! use shared_types::Address;
//!
//! let holders = vec![
//!     PayoutAccountBalance::new(Address::from_low_u64_be(1), 100u64),
//!     PayoutAccountBalance::new(Address::from_low_u64_be(2), 250u64),
//!     PayoutAccountBalance::new(Address::from_low_u64_be(3), 75u64),
//! ];
//! let tree = MerkleTree::build(holders, HashFunction::Keccak256).unwrap();
//!
//! let proof = tree.proof_for(&Address::from_low_u64_be(2)).unwrap();
//! assert_eq!(proof.proof.len(), tree.depth() as usize);
//! assert!(tree.verify(&proof));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export main types for convenience
pub use domain::{
    build_snapshots_parallel, compute_root_from_path, verify_path, CacheConfig, CacheStats,
    ConfigError, HashFunction, HolderSourceError, IndexedLeaf, LeafNode, MerkleConfig,
    MerkleError, MerkleHash, MerkleTree, MiddleNode, Node, PathSegment, PayoutAccountBalance,
    RootNode, SnapshotBatch, SnapshotBuild, SnapshotCache, SnapshotError, SnapshotStoreError,
    SnapshotSummary, Trampoline, WalletProof, CONSTANT_HASH, NIL_HASH, PARALLEL_THRESHOLD,
};

pub use ports::{HolderBalanceSource, SnapshotProofApi, SnapshotStore};

pub use adapters::{InMemoryHolderSource, InMemorySnapshotStore};
