//! # Tree Nodes
//!
//! The node sum type and the canonical sibling ordering.
//!
//! ## Canonical Ordering
//!
//! Whenever two nodes are combined, the one whose hash is numerically
//! smaller becomes the left child, whatever order they were paired in. Tree
//! shape is therefore a function of the leaf set alone.
//!
//! ## Document Shape
//!
//! Nodes serialize to the audit document consumed outside this crate:
//!
//! ```text
//! root   { depth, hash, hash_fn, left, right }
//! middle { hash, left, right }
//! leaf   { hash, data: { address, balance } }
//! nil    { hash }
//! ```

use std::cmp::Ordering;
use std::sync::LazyLock;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use super::balance::PayoutAccountBalance;
use super::hash_function::HashFunction;
use super::merkle_hash::MerkleHash;
use super::value_objects::NIL_HASH;

static NIL: LazyLock<MerkleHash> = LazyLock::new(|| MerkleHash::new(NIL_HASH));

/// A leaf: one holder and the hash of its canonical encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    pub hash: MerkleHash,
    #[serde(rename = "data")]
    pub balance: PayoutAccountBalance,
}

impl LeafNode {
    /// Hash `balance` under `hash_fn`.
    pub fn new(balance: PayoutAccountBalance, hash_fn: HashFunction) -> Self {
        Self {
            hash: balance.leaf_hash(hash_fn),
            balance,
        }
    }
}

/// An internal node below the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiddleNode {
    pub hash: MerkleHash,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl MiddleNode {
    /// Combine two siblings in canonical order.
    pub fn combine(a: Node, b: Node, hash_fn: HashFunction) -> Self {
        let (left, right) = canonical_pair(a, b);
        Self {
            hash: combine_hashes(left.hash(), right.hash(), hash_fn),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Any node that can sit below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Filler pairing the last node of an odd-sized layer.
    Nil,
    Leaf(LeafNode),
    Middle(MiddleNode),
}

impl Node {
    /// The hash carried by [`Node::Nil`].
    pub fn nil_hash() -> &'static MerkleHash {
        &NIL
    }

    pub fn hash(&self) -> &MerkleHash {
        match self {
            Self::Nil => Self::nil_hash(),
            Self::Leaf(leaf) => &leaf.hash,
            Self::Middle(middle) => &middle.hash,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// `(left, right)` for internal nodes.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Self::Middle(middle) => Some((&middle.left, &middle.right)),
            Self::Nil | Self::Leaf(_) => None,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => {
                let mut state = serializer.serialize_struct("NilNode", 1)?;
                state.serialize_field("hash", Self::nil_hash())?;
                state.end()
            }
            Self::Leaf(leaf) => leaf.serialize(serializer),
            Self::Middle(middle) => middle.serialize(serializer),
        }
    }
}

/// The unique top node. Shaped like [`MiddleNode`] but also records the
/// tree depth and the hash function every hash below it was computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootNode {
    /// Layers from the root down to the leaves; a single leaf gives 1.
    pub depth: u32,
    pub hash: MerkleHash,
    pub hash_fn: HashFunction,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl RootNode {
    /// Combine the final pair of a build into the root.
    pub fn combine(a: Node, b: Node, depth: u32, hash_fn: HashFunction) -> Self {
        let MiddleNode { hash, left, right } = MiddleNode::combine(a, b, hash_fn);
        Self {
            depth,
            hash,
            hash_fn,
            left,
            right,
        }
    }
}

/// Order two siblings so the numerically smaller hash is on the left.
///
/// [`Node::Nil`] always goes right: under [`HashFunction::Identity`] a leaf
/// hash is wider than 256 bits and would otherwise outrank the filler.
/// Equal values keep their pairing order.
pub fn canonical_pair(a: Node, b: Node) -> (Node, Node) {
    if a.is_nil() {
        return (b, a);
    }
    if b.is_nil() {
        return (a, b);
    }
    match b.hash().compare_numeric(a.hash()) {
        Ordering::Less => (b, a),
        Ordering::Equal | Ordering::Greater => (a, b),
    }
}

/// Parent hash of an already-ordered pair.
pub fn combine_hashes(left: &MerkleHash, right: &MerkleHash, hash_fn: HashFunction) -> MerkleHash {
    hash_fn.apply(&left.concat(right))
}
