//! # Error Types
//!
//! Errors raised while parsing shared primitives from text.

use thiserror::Error;

/// Errors that can occur when parsing addresses or balances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input contains characters outside `[0-9a-fA-F]` (after the prefix).
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    /// Decoded value has the wrong number of bytes.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input is not a non-negative base-10 integer that fits in 256 bits.
    #[error("Invalid decimal integer: {0}")]
    InvalidDecimal(String),
}
