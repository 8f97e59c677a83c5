//! # Snapshot Runtime
//!
//! Wires the snapshot engine to its collaborators and exposes it as a CLI.
//!
//! ## Modular Structure
//!
//! - `config` - Runtime configuration from the environment
//! - `holders` - JSON file holder source
//! - `service` - Cache, holder source and summary store behind one facade
//! - `cli` - Argument parsing and command execution

pub mod cli;
pub mod config;
pub mod holders;
pub mod service;

pub use cli::{run, Cli, Command};
pub use config::RuntimeConfig;
pub use holders::{parse_holders, JsonFileHolderSource};
pub use service::{ServiceError, SnapshotService};
