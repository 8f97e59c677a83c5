//! # Command Line
//!
//! ```text
//! snapshot-runtime --holders holders.json summary
//! snapshot-runtime --holders holders.json tree
//! snapshot-runtime --holders holders.json proof --address 0x…
//! ```
//!
//! Command output is JSON on stdout. `proof` for an address that holds
//! nothing is an error, so the process exits non-zero.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ps_01_merkle_tree::{HashFunction, InMemorySnapshotStore};
use shared_types::{Address, SnapshotId};

use crate::config::RuntimeConfig;
use crate::holders::JsonFileHolderSource;
use crate::service::SnapshotService;

/// Build holder-snapshot Merkle trees and wallet proofs
#[derive(Parser, Debug, Clone)]
#[command(name = "snapshot-runtime", version)]
#[command(about = "Build holder-snapshot Merkle trees and wallet proofs")]
pub struct Cli {
    /// JSON holder list: [{ "address": "0x…", "balance": "123" }, …]
    #[arg(long)]
    pub holders: PathBuf,

    /// Hash function name or code
    #[arg(long, global = true, env = "SNAPSHOT_HASH_FN")]
    pub hash_fn: Option<HashFunction>,

    /// Chain id the snapshot was taken on
    #[arg(long, default_value_t = 1)]
    pub chain_id: u64,

    /// Token contract whose holders were captured
    #[arg(long, default_value_t = Address::ZERO)]
    pub contract: Address,

    /// Block number of the snapshot
    #[arg(long, default_value_t = 0)]
    pub block: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print root hash, depth, hash function and leaf count
    Summary,
    /// Print the full tree document
    Tree,
    /// Print the proof for one wallet
    Proof {
        /// Wallet address (40 hex digits, optional 0x)
        #[arg(long)]
        address: Address,
    },
}

impl Cli {
    pub fn snapshot_id(&self) -> SnapshotId {
        SnapshotId::new(self.chain_id, self.contract, self.block)
    }
}

/// Execute `cli` and return what should be printed on stdout.
pub fn run(cli: &Cli, config: RuntimeConfig) -> Result<String> {
    let config = config.with_hash_fn(cli.hash_fn);
    let source = Arc::new(JsonFileHolderSource::new(cli.holders.clone()));
    let store = Arc::new(InMemorySnapshotStore::new());
    let service = SnapshotService::new(&config, source, store);
    let snapshot = cli.snapshot_id();

    match &cli.command {
        Command::Summary => {
            let summary = service
                .summary(&snapshot)
                .with_context(|| format!("Failed to build snapshot {}", snapshot))?;
            Ok(serde_json::to_string_pretty(&summary)?)
        }
        Command::Tree => {
            let tree = service
                .tree(&snapshot)
                .with_context(|| format!("Failed to build snapshot {}", snapshot))?;
            Ok(tree.to_json_pretty()?)
        }
        Command::Proof { address } => {
            let proof = service
                .proof_for(&snapshot, address)
                .with_context(|| format!("Failed to build snapshot {}", snapshot))?;
            match proof {
                Some(proof) => Ok(serde_json::to_string_pretty(&proof)?),
                None => bail!("{} is not a holder in snapshot {}", address, snapshot),
            }
        }
    }
}
