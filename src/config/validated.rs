//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config, or [`ValidatedConfig::load`] to also read the config file
/// named on the CLI.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Seconds between full refresh passes (validated, >= the floor)
    pub interval: u64,

    /// Pretty-print snapshot JSON
    pub pretty: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ interval: {}s, pretty: {}, verbose: {} }}",
            self.interval, self.pretty, self.verbose
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// Priority: CLI explicit > TOML > built-in default. The `pretty` flag
    /// uses OR semantics (set in either source enables it).
    ///
    /// # Errors
    ///
    /// Returns an error if the merged interval is below the accepted floor.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let interval = cli
            .interval
            .or_else(|| toml.and_then(|t| t.status.interval))
            .unwrap_or(defaults::INTERVAL_SECS);

        if interval < defaults::MIN_INTERVAL_SECS {
            return Err(ConfigError::IntervalTooSmall { seconds: interval });
        }

        let pretty = cli.pretty || toml.is_some_and(|t| t.status.pretty);

        Ok(Self {
            interval,
            pretty,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
