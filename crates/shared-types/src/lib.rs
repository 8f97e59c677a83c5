//! # Shared Types Crate
//!
//! Primitive types shared by the snapshot crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: wallet addresses and balances are defined
//!   once here and reused by the Merkle core, the runtime and the tests.
//! - **Textual Canonical Form**: addresses render as `0x`-prefixed lowercase
//!   hex, balances as decimal strings, in every serialized document.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
