//! Throttled refresh orchestration.

use std::net::Ipv4Addr;
use std::time::Duration;

use crate::parse;
use crate::query::SystemQuery;

use super::snapshot::{StatusSnapshot, WirelessLink};

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;

/// One interface observed during a refresh pass.
///
/// Transient: records live only for the duration of the pass that
/// produced them.
struct InterfaceRecord {
    name: String,
    address: Ipv4Addr,
    wireless: bool,
}

/// Owns the cached [`StatusSnapshot`] and decides when to re-poll.
///
/// # Contract
///
/// [`get_status`](Self::get_status) is called synchronously on every tick
/// of an external scheduler. Calls within the configured interval of the
/// last refresh return the cached snapshot unchanged and issue no queries.
/// Calls beyond it run a full pass: enumerate interfaces, resolve each
/// address, classify wired vs wireless, and aggregate first-match-per-class
/// results plus the discovery hostname.
///
/// Every internal failure degrades to an absent field and a logged
/// diagnostic; no error ever crosses this boundary.
///
/// # Ownership
///
/// The monitor exclusively owns its refresh state and cache. It is
/// single-threaded by design: the caller's tick loop is the only writer.
pub struct NetworkStatusMonitor<Q> {
    query: Q,
    interval: Duration,
    /// Event time of the last full pass; `None` until the first pass runs.
    last_refresh: Option<f64>,
    snapshot: StatusSnapshot,
}

impl<Q: SystemQuery> NetworkStatusMonitor<Q> {
    /// Creates a monitor with an all-unavailable initial snapshot.
    ///
    /// The interval is fixed for the lifetime of the monitor.
    pub const fn new(query: Q, interval: Duration) -> Self {
        Self {
            query,
            interval,
            last_refresh: None,
            snapshot: StatusSnapshot {
                wired_ip: None,
                wireless: None,
                mdns: None,
            },
        }
    }

    /// Returns the configured minimum spacing between full passes.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the snapshot for the given event time.
    ///
    /// Re-polls only when more than the interval has elapsed since the last
    /// refresh; otherwise the cached snapshot is returned byte-identical.
    /// The first call always performs a pass.
    pub fn get_status(&mut self, eventtime: f64) -> StatusSnapshot {
        let throttled = self
            .last_refresh
            .is_some_and(|last| eventtime - last <= self.interval.as_secs_f64());

        if throttled {
            tracing::debug!(eventtime, "within refresh interval, serving cached status");
            return self.snapshot.clone();
        }

        self.last_refresh = Some(eventtime);
        tracing::debug!(eventtime, "refreshing network status");

        self.snapshot = self.refresh();
        tracing::info!("network status: {}", self.snapshot);
        self.snapshot.clone()
    }

    /// Runs one full pass and builds a fresh snapshot.
    ///
    /// First wired and first wireless address-bearing interface win their
    /// slots; a class with no match this pass resets to absent regardless
    /// of what the previous pass reported.
    fn refresh(&self) -> StatusSnapshot {
        let records = self.scan_interfaces();

        let wired_ip = records.iter().find(|r| !r.wireless).map(|r| r.address);
        let wireless = records
            .iter()
            .find(|r| r.wireless)
            .and_then(|r| self.wireless_link(r));

        StatusSnapshot {
            wired_ip,
            wireless,
            mdns: self.discovery_name(),
        }
    }

    /// Enumerates interfaces and keeps the address-bearing ones,
    /// classified by the wireless probe.
    ///
    /// Classification is re-probed every pass; interfaces can appear and
    /// disappear between refreshes.
    fn scan_interfaces(&self) -> Vec<InterfaceRecord> {
        let names = match self.query.list_interfaces() {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("interface enumeration failed: {e}");
                return Vec::new();
            }
        };

        names
            .into_iter()
            .filter_map(|name| {
                let text = match self.query.address_info(&name) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(interface = %name, "address query failed: {e}");
                        return None;
                    }
                };

                let Some(address) = parse::parse_ipv4(&text) else {
                    tracing::debug!(interface = %name, "no IPv4 address, skipping");
                    return None;
                };

                let wireless = self.query.is_wireless(&name);
                Some(InterfaceRecord {
                    name,
                    address,
                    wireless,
                })
            })
            .collect()
    }

    /// Resolves the network name for the chosen wireless interface.
    ///
    /// The address and name are reported as a pair: when the name cannot
    /// be determined, the whole wireless slot stays absent for this pass.
    fn wireless_link(&self, record: &InterfaceRecord) -> Option<WirelessLink> {
        let text = match self.query.link_info(&record.name) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(interface = %record.name, "link query failed: {e}");
                return None;
            }
        };

        match parse::parse_ssid(&text) {
            Some(network) => Some(WirelessLink {
                address: record.address,
                network,
            }),
            None => {
                tracing::warn!(
                    interface = %record.name,
                    "no network name in link output, reporting wireless as unavailable"
                );
                None
            }
        }
    }

    /// Resolves the `<hostname>.local` discovery name.
    fn discovery_name(&self) -> Option<String> {
        match self.query.hostname() {
            Ok(name) if !name.is_empty() => Some(format!("{name}.local")),
            Ok(_) => {
                tracing::warn!("hostname query returned empty output");
                None
            }
            Err(e) => {
                tracing::warn!("hostname query failed: {e}");
                None
            }
        }
    }
}
