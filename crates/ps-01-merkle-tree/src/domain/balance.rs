//! # Payout Account Balances
//!
//! The leaf payload: one holder's wallet address and token balance.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_types::{u256_to_word, Address, DecimalU256, U256, WORD_LENGTH};

use super::hash_function::HashFunction;
use super::merkle_hash::MerkleHash;

/// Length of the canonical encoding in bytes (two ABI words).
pub const ENCODED_BALANCE_LENGTH: usize = 2 * WORD_LENGTH;

/// A holder's balance in one snapshot.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayoutAccountBalance {
    /// Holder wallet.
    pub address: Address,
    /// Token balance in base units.
    #[serde_as(as = "DecimalU256")]
    pub balance: U256,
}

impl PayoutAccountBalance {
    /// Create a balance entry.
    pub fn new(address: Address, balance: impl Into<U256>) -> Self {
        Self {
            address,
            balance: balance.into(),
        }
    }

    /// `abi.encode(address, uint256)`: the address left-padded to 32 bytes
    /// followed by the balance as a 32-byte big-endian integer.
    pub fn encode(&self) -> [u8; ENCODED_BALANCE_LENGTH] {
        let mut encoded = [0u8; ENCODED_BALANCE_LENGTH];
        encoded[..WORD_LENGTH].copy_from_slice(&self.address.to_word());
        encoded[WORD_LENGTH..].copy_from_slice(&u256_to_word(&self.balance));
        encoded
    }

    /// [`encode`](Self::encode) as a `0x`-prefixed hex string, the input the
    /// hash function sees for this leaf.
    pub fn canonical_encoding(&self) -> String {
        format!("0x{}", hex::encode(self.encode()))
    }

    /// The leaf hash under `hash_fn`.
    pub fn leaf_hash(&self, hash_fn: HashFunction) -> MerkleHash {
        hash_fn.apply(&self.canonical_encoding())
    }
}
