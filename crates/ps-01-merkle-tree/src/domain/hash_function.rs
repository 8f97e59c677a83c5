//! # Hash Functions
//!
//! The named mappings from hex input strings to [`MerkleHash`] values.
//!
//! Only [`HashFunction::Keccak256`] is used for real snapshots. `Identity`
//! and `Constant` are deterministic stand-ins for exercising tree shape and
//! structure in tests. Every variant has a persisted code; loading an unknown
//! code is a configuration error, never a silent fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use shared_types::strip_hex_prefix;

use super::errors::ConfigError;
use super::merkle_hash::MerkleHash;

/// Output of [`HashFunction::Constant`] for every input.
pub const CONSTANT_HASH: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// A selectable hash function, persisted alongside each snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashFunction {
    /// keccak-256 over the hex-decoded input bytes.
    #[default]
    Keccak256,
    /// Echoes the input as the hash.
    Identity,
    /// Returns [`CONSTANT_HASH`] regardless of input.
    Constant,
}

impl HashFunction {
    /// Every supported variant, in code order.
    pub const ALL: [Self; 3] = [Self::Keccak256, Self::Identity, Self::Constant];

    /// Persisted numeric code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Keccak256 => 0,
            Self::Identity => 1,
            Self::Constant => 2,
        }
    }

    /// Stable lowercase name, as used in JSON documents.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keccak256 => "keccak256",
            Self::Identity => "identity",
            Self::Constant => "constant",
        }
    }

    /// Resolve a persisted numeric code.
    pub fn from_code(code: u8) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|f| f.code() == code)
            .ok_or_else(|| ConfigError::UnknownHashFunction {
                code: code.to_string(),
            })
    }

    /// Whether the function is a real one-way hash.
    pub const fn is_cryptographic(self) -> bool {
        matches!(self, Self::Keccak256)
    }

    /// Hash a hex input string.
    pub fn apply(self, input: &str) -> MerkleHash {
        match self {
            Self::Keccak256 => keccak256(input),
            Self::Identity => MerkleHash::new(input),
            Self::Constant => MerkleHash::new(CONSTANT_HASH),
        }
    }
}

/// keccak-256 of the bytes `input` encodes.
///
/// Input that is not valid hex is hashed as its UTF-8 bytes.
fn keccak256(input: &str) -> MerkleHash {
    let bytes = hex::decode(strip_hex_prefix(input)).unwrap_or_else(|_| input.as_bytes().to_vec());
    let digest = Keccak256::digest(&bytes);
    MerkleHash::from_bytes(digest.as_slice())
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the name or the numeric code.
impl FromStr for HashFunction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code);
        }
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownHashFunction {
                code: s.to_string(),
            })
    }
}

impl TryFrom<u8> for HashFunction {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
