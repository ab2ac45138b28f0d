//! System query boundary.
//!
//! This module provides:
//! - The [`SystemQuery`] trait, the narrow seam between the status monitor
//!   and the operating system
//! - [`HostQuery`], the production implementation backed by sysfs and
//!   external commands
//! - [`QueryError`], the error type for individual queries

mod error;
mod host;

pub use error::QueryError;
pub use host::HostQuery;

/// Trait for the bounded-time system queries the monitor depends on.
///
/// # Design
///
/// - Every method is a single external query with a short, fixed timeout
/// - Enables dependency injection for testing with scripted implementations;
///   the core logic (classification, parsing, throttling) must be testable
///   without a real network stack
/// - Callers decide how each failure degrades; no method ever panics
pub trait SystemQuery: Send + Sync {
    /// Lists the host's network interface names, excluding loopback.
    ///
    /// Enumeration order is whatever the underlying listing yields;
    /// callers treat "first listed" as the tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the listing source is unreadable.
    fn list_interfaces(&self) -> Result<Vec<String>, QueryError>;

    /// Returns raw address-listing output for one interface.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the address query cannot be launched,
    /// times out, or exits unsuccessfully.
    fn address_info(&self, iface: &str) -> Result<String, QueryError>;

    /// Returns true if a wireless-capability probe against the interface
    /// succeeds.
    ///
    /// Absence of wireless capability and probe failure are
    /// indistinguishable by design; both report `false`.
    fn is_wireless(&self, iface: &str) -> bool;

    /// Returns raw wireless-link output for one interface.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the link query cannot be launched,
    /// times out, or exits unsuccessfully.
    fn link_info(&self, iface: &str) -> Result<String, QueryError>;

    /// Returns the machine's short host name, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the hostname query cannot be launched,
    /// times out, or exits unsuccessfully.
    fn hostname(&self) -> Result<String, QueryError>;
}
