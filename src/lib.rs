//! Netwatch: host network reachability monitor.
//!
//! A library for periodically determining a host's network reachability
//! (wired IPv4, wireless IPv4, wireless network name, mDNS hostname) for
//! display by an embedded device's status surface.

pub mod config;
pub mod parse;
pub mod query;
pub mod status;
pub mod time;
