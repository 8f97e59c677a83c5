//! # Snapshot Runtime
//!
//! Entry point for the snapshot CLI.
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments
//! 2. Initialize logging (stderr)
//! 3. Load configuration from the environment; flags override it
//! 4. Execute the command and print its JSON output

use anyhow::{Context, Result};
use clap::Parser;
use snapshot_runtime::{run, Cli, RuntimeConfig};
use snapshot_telemetry::{init_logging, TelemetryConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if cli.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_logging(&telemetry).context("Failed to initialize logging")?;

    let config = RuntimeConfig::from_env().context("Invalid runtime configuration")?;
    let output = run(&cli, config)?;
    println!("{}", output);
    Ok(())
}
