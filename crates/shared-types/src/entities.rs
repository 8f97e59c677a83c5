//! # Core Snapshot Entities
//!
//! Primitive entities every snapshot crate agrees on.
//!
//! ## Clusters
//!
//! - **Holders**: `Address` (20-byte wallet address), `U256` balances
//! - **Snapshots**: `SnapshotId` (chain, token contract, block)
//!
//! ## Word Encoding
//!
//! The payout contract reads addresses and balances as 32-byte ABI words.
//! `Address::to_word` and `u256_to_word` produce exactly those words so the
//! off-chain hash input matches `abi.encode(address, uint256)` bit for bit.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeAs, SerializeAs};

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

use crate::errors::ParseError;

/// Width of an Ethereum-style wallet address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Width of a single ABI-encoded word in bytes.
pub const WORD_LENGTH: usize = 32;

/// Strip a leading `0x`/`0X` radix prefix, if any.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

// =============================================================================
// ADDRESS
// =============================================================================

/// A 20-byte Ethereum-style wallet address.
///
/// Parses from 40 hex digits with an optional `0x` prefix (any case) and
/// always renders as `0x` followed by lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Wrap raw address bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build an address whose low 8 bytes hold `value` (big-endian).
    pub fn from_low_u64_be(value: u64) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[ADDRESS_LENGTH - 8..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// The address left-padded with zeros to a 32-byte ABI word.
    pub fn to_word(&self) -> [u8; WORD_LENGTH] {
        let mut word = [0u8; WORD_LENGTH];
        word[WORD_LENGTH - ADDRESS_LENGTH..].copy_from_slice(&self.0);
        word
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(s.trim());
        let bytes = hex::decode(digits).map_err(|_| ParseError::InvalidHex(s.to_string()))?;
        let array: [u8; ADDRESS_LENGTH] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| ParseError::InvalidLength {
                    expected: ADDRESS_LENGTH,
                    actual: bytes.len(),
                })?;
        Ok(Self(array))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// BALANCES
// =============================================================================

/// Parse a non-negative base-10 integer into a `U256`.
///
/// `U256::from_str` reads hex, so decimal input must come through here.
pub fn parse_decimal_u256(s: &str) -> Result<U256, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidDecimal(s.to_string()));
    }
    U256::from_dec_str(trimmed).map_err(|_| ParseError::InvalidDecimal(s.to_string()))
}

/// A `U256` as a 32-byte big-endian ABI word.
pub fn u256_to_word(value: &U256) -> [u8; WORD_LENGTH] {
    let mut word = [0u8; WORD_LENGTH];
    value.to_big_endian(&mut word);
    word
}

/// `serde_with` adapter rendering a `U256` as a decimal string.
///
/// Deserialization accepts either a decimal string or a JSON integer.
pub struct DecimalU256;

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Text(String),
    Number(u64),
}

impl SerializeAs<U256> for DecimalU256 {
    fn serialize_as<S: Serializer>(source: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(source)
    }
}

impl<'de> DeserializeAs<'de, U256> for DecimalU256 {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        match DecimalRepr::deserialize(deserializer)? {
            DecimalRepr::Text(text) => parse_decimal_u256(&text).map_err(de::Error::custom),
            DecimalRepr::Number(value) => Ok(U256::from(value)),
        }
    }
}

// =============================================================================
// SNAPSHOTS
// =============================================================================

/// Identifies one holder snapshot: a token contract on a chain at a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotId {
    /// EVM chain id.
    pub chain_id: u64,
    /// Token contract whose holders were captured.
    pub contract: Address,
    /// Block at which balances were read.
    pub block_number: u64,
}

impl SnapshotId {
    /// Create a snapshot identifier.
    pub fn new(chain_id: u64, contract: Address, block_number: u64) -> Self {
        Self {
            chain_id,
            contract,
            block_number,
        }
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.chain_id, self.contract, self.block_number)
    }
}
