//! Fail-soft parsers for system command output.
//!
//! These functions extract the interesting fragment from raw `ip addr` and
//! `iw dev <iface> link` output. They never fail loudly: anything that does
//! not match returns `None` and the caller degrades the affected field.

use std::net::Ipv4Addr;

/// Marker introducing an IPv4 address line in `ip addr` output.
const INET_MARKER: &str = "inet ";

/// Marker identifying IPv6 lines, which must never match.
const INET6_MARKER: &str = "inet6";

/// Marker introducing the network name in `iw dev <iface> link` output.
const SSID_MARKER: &str = "SSID:";

/// Extracts the first IPv4 address from `ip addr show` output.
///
/// Scans line by line for a line containing `inet ` but not `inet6` and
/// parses the dotted quad preceding the `/` prefix-length separator.
/// Lines whose candidate does not parse as IPv4 are skipped.
#[must_use]
pub fn parse_ipv4(text: &str) -> Option<Ipv4Addr> {
    text.lines()
        .filter(|line| line.contains(INET_MARKER) && !line.contains(INET6_MARKER))
        .find_map(|line| {
            let rest = line.split(INET_MARKER).nth(1)?;
            let token = rest.split_whitespace().next()?;
            let quad = token.split('/').next()?;
            quad.parse().ok()
        })
}

/// Extracts the network name (SSID) from `iw dev <iface> link` output.
///
/// Scans for a line whose content starts with `SSID:` and returns the
/// trimmed remainder. Matching on the line start keeps `BSS`/`BSSID`
/// lines from false-positiving.
#[must_use]
pub fn parse_ssid(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        let rest = line.trim_start().strip_prefix(SSID_MARKER)?;
        let ssid = rest.trim();
        (!ssid.is_empty()).then(|| ssid.to_string())
    })
}
