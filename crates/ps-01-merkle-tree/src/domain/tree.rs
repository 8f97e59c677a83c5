//! # Snapshot Merkle Tree
//!
//! Builds the canonical tree over a snapshot's holders and answers proof
//! queries against it.
//!
//! ## Invariants
//!
//! - **Order Independence**: leaves are sorted by numeric hash before
//!   pairing and every pair is re-ordered by hash, so the root depends only
//!   on the leaf set.
//! - **No Ambiguous Leaves**: duplicate addresses and duplicate leaf hashes
//!   are rejected; no tree is produced.
//! - **Uniform Depth**: every leaf sits exactly `depth` levels below the
//!   root. Odd layers are padded with [`Node::Nil`] at the layer where the
//!   gap occurs.
//! - **Immutable After Build**: the root and both indexes are written once
//!   in [`MerkleTree::build`]; a built tree is `Send + Sync` and can serve
//!   proof lookups from many threads without locking.
//!
//! ## Algorithm
//!
//! 1. Reject empty input and duplicate addresses
//! 2. Hash every leaf, reject duplicate hashes, sort ascending by hash
//! 3. Pair each layer positionally (trailing node pairs with `Nil`), order
//!    every pair by hash, combine as `H(left ++ right)`; loop until one pair
//!    remains and make it the root
//! 4. Index leaves by hash and by address with their path ordinal (left = 0,
//!    right = 1, read from the root), using a trampolined traversal

use std::collections::HashMap;

use serde::ser::Serializer;
use serde::Serialize;
use shared_types::Address;
use tracing::{debug, info, warn};

use super::balance::PayoutAccountBalance;
use super::errors::MerkleError;
use super::hash_function::HashFunction;
use super::merkle_hash::MerkleHash;
use super::node::{LeafNode, MiddleNode, Node, RootNode};
use super::proof::{PathSegment, WalletProof};
use super::trampoline::Trampoline;
use super::value_objects::{MerkleConfig, SnapshotSummary};

/// A leaf together with its position in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedLeaf {
    /// Root-to-leaf path read as a binary number (left = 0, right = 1).
    pub ordinal: u64,
    pub leaf: LeafNode,
}

/// A built, immutable snapshot tree.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    root: RootNode,
    leaves_by_hash: HashMap<MerkleHash, IndexedLeaf>,
    leaves_by_address: HashMap<Address, IndexedLeaf>,
}

impl MerkleTree {
    /// Build the tree for a snapshot.
    ///
    /// # Errors
    ///
    /// - [`MerkleError::EmptyLeaves`] for an empty holder list
    /// - [`MerkleError::AddressCollision`] if an address repeats
    /// - [`MerkleError::HashCollision`] if two holders share a leaf hash
    pub fn build(
        leaves: Vec<PayoutAccountBalance>,
        hash_fn: HashFunction,
    ) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }
        debug!(leaf_count = leaves.len(), hash_fn = %hash_fn, "Building snapshot Merkle tree");

        Self::reject_address_collisions(&leaves)?;
        let sorted = Self::hash_and_sort(leaves, hash_fn)?;
        let root = Self::build_layers(sorted, hash_fn).ok_or(MerkleError::EmptyLeaves)?;
        let (leaves_by_hash, leaves_by_address) = Self::index_leaves(&root);

        info!(
            leaf_count = leaves_by_hash.len(),
            depth = root.depth,
            root = %root.hash,
            hash_fn = %hash_fn,
            "Snapshot Merkle tree built"
        );

        Ok(Self {
            root,
            leaves_by_hash,
            leaves_by_address,
        })
    }

    /// Build using the hash function from `config`.
    pub fn with_config(
        leaves: Vec<PayoutAccountBalance>,
        config: &MerkleConfig,
    ) -> Result<Self, MerkleError> {
        Self::build(leaves, config.hash_fn)
    }

    pub fn root(&self) -> &RootNode {
        &self.root
    }

    pub fn root_hash(&self) -> &MerkleHash {
        &self.root.hash
    }

    pub fn depth(&self) -> u32 {
        self.root.depth
    }

    pub fn hash_fn(&self) -> HashFunction {
        self.root.hash_fn
    }

    /// Number of holders (filler nodes excluded).
    pub fn leaf_count(&self) -> usize {
        self.leaves_by_hash.len()
    }

    /// Root hash, depth and hash function to persist for the snapshot.
    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            root_hash: self.root.hash.clone(),
            depth: self.root.depth,
            hash_fn: self.root.hash_fn,
            leaf_count: self.leaf_count(),
        }
    }

    pub fn leaf_by_hash(&self, hash: &MerkleHash) -> Option<&IndexedLeaf> {
        self.leaves_by_hash.get(hash)
    }

    pub fn leaf_by_address(&self, address: &Address) -> Option<&IndexedLeaf> {
        self.leaves_by_address.get(address)
    }

    /// All leaves in left-to-right order.
    pub fn leaves(&self) -> Vec<&IndexedLeaf> {
        let mut leaves: Vec<_> = self.leaves_by_hash.values().collect();
        leaves.sort_by_key(|indexed| indexed.ordinal);
        leaves
    }

    /// Inclusion path for `balance`, root-to-leaf.
    ///
    /// Returns `None` when the holder is not in this snapshot, including
    /// when the address is present with a different balance.
    pub fn path_to(&self, balance: &PayoutAccountBalance) -> Option<Vec<PathSegment>> {
        let hash = balance.leaf_hash(self.hash_fn());
        let indexed = self.leaves_by_hash.get(&hash)?;
        if indexed.leaf.balance != *balance {
            return None;
        }
        Some(self.path_for_ordinal(indexed.ordinal))
    }

    /// Inclusion path for whatever balance `address` holds in this snapshot.
    pub fn path_to_address(&self, address: &Address) -> Option<Vec<PathSegment>> {
        self.leaves_by_address
            .get(address)
            .map(|indexed| self.path_for_ordinal(indexed.ordinal))
    }

    /// The proof payload for `address`, or `None` if it holds nothing here.
    pub fn proof_for(&self, address: &Address) -> Option<WalletProof> {
        let indexed = self.leaves_by_address.get(address)?;
        let segments = self.path_for_ordinal(indexed.ordinal);
        Some(WalletProof::from_segments(
            indexed.leaf.balance.clone(),
            &segments,
        ))
    }

    /// Whether `proof` reproduces this tree's root.
    pub fn verify(&self, proof: &WalletProof) -> bool {
        proof.verify(&self.root.hash, self.hash_fn())
    }

    /// The audit document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    fn reject_address_collisions(leaves: &[PayoutAccountBalance]) -> Result<(), MerkleError> {
        let mut counts: HashMap<Address, usize> = HashMap::with_capacity(leaves.len());
        for leaf in leaves {
            *counts.entry(leaf.address).or_insert(0) += 1;
        }

        let collision = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .min_by_key(|(address, _)| *address);

        match collision {
            Some((address, count)) => {
                warn!(address = %address, count, "Address collision in snapshot leaves");
                Err(MerkleError::AddressCollision { address, count })
            }
            None => Ok(()),
        }
    }

    fn hash_and_sort(
        leaves: Vec<PayoutAccountBalance>,
        hash_fn: HashFunction,
    ) -> Result<Vec<LeafNode>, MerkleError> {
        let mut nodes: Vec<LeafNode> = leaves
            .into_iter()
            .map(|balance| LeafNode::new(balance, hash_fn))
            .collect();

        let mut counts: HashMap<&MerkleHash, usize> = HashMap::with_capacity(nodes.len());
        for node in &nodes {
            *counts.entry(&node.hash).or_insert(0) += 1;
        }
        let collision = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .min_by(|(a, _), (b, _)| a.compare_numeric(b))
            .map(|(hash, count)| (hash.clone(), count));

        if let Some((hash, count)) = collision {
            warn!(hash = %hash, count, hash_fn = %hash_fn, "Leaf hash collision in snapshot");
            return Err(MerkleError::HashCollision { hash, count });
        }

        nodes.sort_by(|a, b| a.hash.compare_numeric(&b.hash));
        Ok(nodes)
    }

    /// Fold layers bottom-up until one pair is left. `None` only for an
    /// empty layer.
    fn build_layers(leaves: Vec<LeafNode>, hash_fn: HashFunction) -> Option<RootNode> {
        let mut layer: Vec<Node> = leaves.into_iter().map(Node::Leaf).collect();
        let mut depth: u32 = 1;

        loop {
            let mut pairs = Self::pair_up(layer);
            match pairs.len() {
                0 => return None,
                1 => return pairs.pop().map(|(a, b)| RootNode::combine(a, b, depth, hash_fn)),
                _ => {}
            }

            layer = pairs
                .into_iter()
                .map(|(a, b)| Node::Middle(MiddleNode::combine(a, b, hash_fn)))
                .collect();
            depth += 1;
        }
    }

    /// Pair neighbours in list order; a trailing node is paired with `Nil`.
    fn pair_up(layer: Vec<Node>) -> Vec<(Node, Node)> {
        let mut pairs = Vec::with_capacity(layer.len().div_ceil(2));
        let mut nodes = layer.into_iter();
        while let Some(first) = nodes.next() {
            let second = nodes.next().unwrap_or(Node::Nil);
            pairs.push((first, second));
        }
        pairs
    }

    // =========================================================================
    // Indexing
    // =========================================================================

    fn index_leaves(
        root: &RootNode,
    ) -> (HashMap<MerkleHash, IndexedLeaf>, HashMap<Address, IndexedLeaf>) {
        let entries = collect_children(&root.left, &root.right, 0).run();

        let mut by_hash = HashMap::with_capacity(entries.len());
        let mut by_address = HashMap::with_capacity(entries.len());
        for (ordinal, leaf) in entries {
            let indexed = IndexedLeaf {
                ordinal,
                leaf: leaf.clone(),
            };
            by_address.insert(leaf.balance.address, indexed.clone());
            by_hash.insert(leaf.hash.clone(), indexed);
        }
        (by_hash, by_address)
    }

    /// Walk from the root along the `depth`-bit binary form of `ordinal`,
    /// recording the sibling at each level.
    fn path_for_ordinal(&self, ordinal: u64) -> Vec<PathSegment> {
        let depth = self.root.depth as usize;
        let bits = format!("{:0width$b}", ordinal, width = depth);

        let mut segments = Vec::with_capacity(depth);
        let mut children = Some((self.root.left.as_ref(), self.root.right.as_ref()));
        for bit in bits.chars() {
            let Some((left, right)) = children else {
                break;
            };
            let (next, sibling, is_left) = if bit == '1' {
                (right, left, true)
            } else {
                (left, right, false)
            };
            segments.push(PathSegment {
                sibling_hash: sibling.hash().clone(),
                is_left,
            });
            children = next.children();
        }
        segments
    }
}

type LeafEntries<'a> = Vec<(u64, &'a LeafNode)>;

/// Leaves under `node`, whose own ordinal is `ordinal`.
fn collect_leaves(node: &Node, ordinal: u64) -> Trampoline<'_, LeafEntries<'_>> {
    Trampoline::suspend(move || match node {
        Node::Nil => Trampoline::done(Vec::new()),
        Node::Leaf(leaf) => Trampoline::done(vec![(ordinal, leaf)]),
        Node::Middle(middle) => collect_children(&middle.left, &middle.right, ordinal),
    })
}

/// Leaves under both children of a node with ordinal `ordinal`, left first.
fn collect_children<'a>(
    left: &'a Node,
    right: &'a Node,
    ordinal: u64,
) -> Trampoline<'a, LeafEntries<'a>> {
    let left_ordinal = ordinal << 1;
    collect_leaves(left, left_ordinal).flat_map(move |mut entries| {
        collect_leaves(right, left_ordinal | 1).map(move |rest| {
            entries.extend(rest);
            entries
        })
    })
}

impl Serialize for MerkleTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
