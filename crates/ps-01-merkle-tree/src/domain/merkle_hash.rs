//! # Merkle Hash Values
//!
//! Hex-string hash values and the numeric ordering that makes tree shape
//! canonical.
//!
//! ## Equality vs Ordering
//!
//! Two hashes are `==` only when their normalized (lowercased) strings match.
//! [`MerkleHash::compare_numeric`] instead compares the base-16 values, so
//! `0x01`, `1` and `0X1` order as equal while remaining distinct keys. There
//! is no `Ord` impl since it would disagree with `Eq`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{strip_hex_prefix, ParseError};

/// A hash value held as a lowercase hex string, with or without `0x`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MerkleHash(String);

impl MerkleHash {
    /// Wrap a hex string, normalizing it to lowercase.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_ascii_lowercase())
    }

    /// Parse untrusted input, requiring at least one hex digit after the
    /// optional prefix.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let digits = strip_hex_prefix(value);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidHex(value.to_string()));
        }
        Ok(Self::new(value))
    }

    /// Build a `0x`-prefixed hash from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    /// The normalized string form, prefix included if present.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex payload without its radix prefix.
    pub fn digits(&self) -> &str {
        strip_hex_prefix(&self.0)
    }

    /// Compare two hashes by the unsigned integer their hex digits encode.
    ///
    /// The radix prefix and leading zeros are ignored.
    pub fn compare_numeric(&self, other: &Self) -> Ordering {
        let lhs = significant_digits(self.digits());
        let rhs = significant_digits(other.digits());
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }

    /// Concatenate two payloads as input for a subsequent hash application.
    ///
    /// Only `other` loses its radix prefix; `self` is kept verbatim. The
    /// payout contract hashes exactly this string, so the asymmetry must stay.
    pub fn concat(&self, other: &Self) -> String {
        let mut joined = String::with_capacity(self.0.len() + other.0.len());
        joined.push_str(&self.0);
        joined.push_str(other.digits());
        joined
    }
}

/// Digits with leading zeros removed. All lowercase hex digits sort in ASCII
/// order, so equal-length digit strings compare like the numbers they encode.
fn significant_digits(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

impl From<String> for MerkleHash {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for MerkleHash {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<MerkleHash> for String {
    fn from(hash: MerkleHash) -> Self {
        hash.0
    }
}

impl fmt::Display for MerkleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for MerkleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MerkleHash({})", self.0)
    }
}
