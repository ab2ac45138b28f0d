//! Configuration layer for netwatch.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The `pretty` flag uses OR semantics: once set `true` in TOML, the CLI
//! cannot override it to `false` (flags only enable, not disable).
//!
//! # Internal Tuning Parameters
//!
//! The following parameters are intentionally not user-configurable:
//! - **Query timeout**: every external system query runs with a fixed
//!   2-second timeout to bound scheduler-tick latency.
//! - **Tick period**: the built-in runner ticks once per second; the
//!   refresh interval, not the tick period, governs how often the host is
//!   actually queried.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
