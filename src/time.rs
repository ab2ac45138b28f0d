//! Time abstraction for testability.
//!
//! This module provides a [`Clock`] trait that allows injecting mock clocks
//! in tests while using the real monotonic clock in production.
//!
//! The monitor itself never reads a clock; event times always arrive from
//! the caller. The tick loop uses a [`Clock`] to produce those event times.

use std::time::Instant;

/// Abstraction over monotonic event time for testability.
///
/// Implementations return seconds since an arbitrary, fixed epoch.
/// Successive readings never decrease.
pub trait Clock: Send + Sync {
    /// Returns the current monotonic time in seconds.
    fn monotonic(&self) -> f64;
}

/// Production clock measuring seconds since its own construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose epoch is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
