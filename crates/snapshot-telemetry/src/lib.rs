//! # Snapshot Telemetry
//!
//! Structured logging for the payout snapshot binaries.
//!
//! Library crates only emit `tracing` events; this crate installs the global
//! subscriber that formats them. Output goes to stderr so command output on
//! stdout stays machine-readable.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use snapshot_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // Application code here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SNAPSHOT_LOG_LEVEL` | `info` | Log filter directive |
//! | `RUST_LOG` | | Fallback when `SNAPSHOT_LOG_LEVEL` is unset |
//! | `SNAPSHOT_JSON_LOGS` | `false` | Emit JSON lines instead of pretty text |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Failed to install global subscriber: {0}")]
    SubscriberInit(String),
}
