//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use super::defaults;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Refresh interval below the accepted floor.
    #[error(
        "Invalid interval {seconds}s: must be at least {}s",
        defaults::MIN_INTERVAL_SECS
    )]
    IntervalTooSmall {
        /// The rejected value, in seconds.
        seconds: u64,
    },
}
