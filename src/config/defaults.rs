//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default spacing between full refresh passes, in seconds.
pub const INTERVAL_SECS: u64 = 60;

/// Smallest accepted refresh interval, in seconds.
pub const MIN_INTERVAL_SECS: u64 = 10;

/// Fixed timeout for each external system query, in seconds.
pub const QUERY_TIMEOUT_SECS: u64 = 2;

/// Period of the scheduler tick that drives `get_status`, in seconds.
pub const TICK_PERIOD_SECS: u64 = 1;

/// Default refresh interval as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_secs(INTERVAL_SECS)
}

/// Query timeout as Duration.
#[must_use]
pub const fn query_timeout() -> Duration {
    Duration::from_secs(QUERY_TIMEOUT_SECS)
}

/// Tick period as Duration.
#[must_use]
pub const fn tick_period() -> Duration {
    Duration::from_secs(TICK_PERIOD_SECS)
}
