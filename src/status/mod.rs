//! Status layer: the cached snapshot and the refresh orchestrator.
//!
//! This module provides:
//! - [`StatusSnapshot`] and [`WirelessLink`], the four-field result object
//! - [`NetworkStatusMonitor`], which owns the cache and the throttled
//!   refresh logic
//! - [`UNAVAILABLE`], the sentinel shown for fields that could not be
//!   determined

mod monitor;
mod snapshot;

pub use monitor::NetworkStatusMonitor;
pub use snapshot::{StatusSnapshot, UNAVAILABLE, WirelessLink};
