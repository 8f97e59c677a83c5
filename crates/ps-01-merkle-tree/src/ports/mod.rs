//! # Ports
//!
//! - [`inbound`]: the proof API served to claimants and the payout contract
//! - [`outbound`]: holder ingestion and summary persistence

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
