//! # Runtime Configuration
//!
//! Environment-driven settings; command-line flags override them.

use std::env;

use ps_01_merkle_tree::{CacheConfig, ConfigError, HashFunction, MerkleConfig};

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub merkle: MerkleConfig,
    pub cache: CacheConfig,
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SNAPSHOT_HASH_FN`: hash function name or code (default: keccak256)
    /// - `SNAPSHOT_CACHE_SIZE`: maximum cached trees (default: 1000)
    ///
    /// # Errors
    ///
    /// An unknown hash function or a non-numeric cache size. These are
    /// fatal: a snapshot built with the wrong hash function has a root the
    /// payout contract cannot verify against.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("SNAPSHOT_HASH_FN") {
            config.merkle.hash_fn = value.parse()?;
        }

        if let Some(value) = lookup("SNAPSHOT_CACHE_SIZE") {
            config.cache.max_cached_trees =
                value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SNAPSHOT_CACHE_SIZE".to_string(),
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    /// Apply a command-line hash function override.
    pub fn with_hash_fn(mut self, hash_fn: Option<HashFunction>) -> Self {
        if let Some(hash_fn) = hash_fn {
            self.merkle.hash_fn = hash_fn;
        }
        self
    }
}
