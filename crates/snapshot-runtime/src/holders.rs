//! # JSON Holder Source
//!
//! Reads a holder list of the form
//! `[{ "address": "0x…", "balance": "123" }, …]`.

use std::fs;
use std::path::{Path, PathBuf};

use ps_01_merkle_tree::{HolderBalanceSource, HolderSourceError, PayoutAccountBalance};
use shared_types::SnapshotId;
use tracing::debug;

/// Parse a JSON holder list.
pub fn parse_holders(raw: &str) -> Result<Vec<PayoutAccountBalance>, HolderSourceError> {
    serde_json::from_str(raw).map_err(|e| HolderSourceError::Malformed(e.to_string()))
}

/// Serves the same holder file for any snapshot it is asked about.
#[derive(Debug, Clone)]
pub struct JsonFileHolderSource {
    path: PathBuf,
}

impl JsonFileHolderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HolderBalanceSource for JsonFileHolderSource {
    fn fetch_balances(
        &self,
        snapshot: &SnapshotId,
    ) -> Result<Vec<PayoutAccountBalance>, HolderSourceError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            HolderSourceError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        let holders = parse_holders(&raw)?;
        debug!(
            snapshot = %snapshot,
            path = %self.path.display(),
            holders = holders.len(),
            "Loaded holder file"
        );
        Ok(holders)
    }
}
