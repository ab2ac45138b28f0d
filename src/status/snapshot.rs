//! The four-field network status snapshot.

use std::fmt;
use std::net::Ipv4Addr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Sentinel shown for a field whose value could not be determined.
///
/// Distinct from an empty or error value: the status surface always
/// receives a complete four-field snapshot, never a partial one.
pub const UNAVAILABLE: &str = "unavailable";

/// A wireless association: address and network name, always paired.
///
/// The pairing is deliberate. A wireless IP is never reported without its
/// network name, and vice versa; a pass that cannot determine both leaves
/// the whole slot empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirelessLink {
    /// IPv4 address of the wireless interface.
    pub address: Ipv4Addr,
    /// Name (SSID) of the associated network.
    pub network: String,
}

/// A snapshot of the host's network reachability at one refresh.
///
/// Serializes to a mapping with exactly four string keys — `wired_ip`,
/// `wireless_ip`, `wireless_ssid`, `mdns` — with [`UNAVAILABLE`] standing
/// in for absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// IPv4 address of the first wired interface, if any.
    pub wired_ip: Option<Ipv4Addr>,
    /// Address and network name of the first wireless interface, if any.
    pub wireless: Option<WirelessLink>,
    /// Local discovery hostname (`<host>.local`), if resolvable.
    pub mdns: Option<String>,
}

impl StatusSnapshot {
    /// The `wired_ip` field as shown to the status surface.
    #[must_use]
    pub fn wired_ip_field(&self) -> String {
        self.wired_ip
            .map_or_else(|| UNAVAILABLE.to_string(), |ip| ip.to_string())
    }

    /// The `wireless_ip` field as shown to the status surface.
    #[must_use]
    pub fn wireless_ip_field(&self) -> String {
        self.wireless
            .as_ref()
            .map_or_else(|| UNAVAILABLE.to_string(), |link| link.address.to_string())
    }

    /// The `wireless_ssid` field as shown to the status surface.
    #[must_use]
    pub fn wireless_ssid_field(&self) -> String {
        self.wireless
            .as_ref()
            .map_or_else(|| UNAVAILABLE.to_string(), |link| link.network.clone())
    }

    /// The `mdns` field as shown to the status surface.
    #[must_use]
    pub fn mdns_field(&self) -> String {
        self.mdns
            .clone()
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }
}

impl Serialize for StatusSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StatusSnapshot", 4)?;
        state.serialize_field("wired_ip", &self.wired_ip_field())?;
        state.serialize_field("wireless_ip", &self.wireless_ip_field())?;
        state.serialize_field("wireless_ssid", &self.wireless_ssid_field())?;
        state.serialize_field("mdns", &self.mdns_field())?;
        state.end()
    }
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wired: {}, wireless: {} ({}), mdns: {}",
            self.wired_ip_field(),
            self.wireless_ip_field(),
            self.wireless_ssid_field(),
            self.mdns_field(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> StatusSnapshot {
        StatusSnapshot {
            wired_ip: Some("10.0.0.5".parse().unwrap()),
            wireless: Some(WirelessLink {
                address: "192.168.0.9".parse().unwrap(),
                network: "Lab".to_string(),
            }),
            mdns: Some("printer1.local".to_string()),
        }
    }

    #[test]
    fn default_is_all_unavailable() {
        let snapshot = StatusSnapshot::default();

        assert_eq!(snapshot.wired_ip_field(), UNAVAILABLE);
        assert_eq!(snapshot.wireless_ip_field(), UNAVAILABLE);
        assert_eq!(snapshot.wireless_ssid_field(), UNAVAILABLE);
        assert_eq!(snapshot.mdns_field(), UNAVAILABLE);
    }

    #[test]
    fn serializes_to_exactly_four_string_keys() {
        let json = serde_json::to_value(full_snapshot()).unwrap();
        let map = json.as_object().unwrap();

        assert_eq!(map.len(), 4);
        assert_eq!(map["wired_ip"], "10.0.0.5");
        assert_eq!(map["wireless_ip"], "192.168.0.9");
        assert_eq!(map["wireless_ssid"], "Lab");
        assert_eq!(map["mdns"], "printer1.local");
    }

    #[test]
    fn absent_fields_serialize_as_sentinel() {
        let json = serde_json::to_value(StatusSnapshot::default()).unwrap();
        let map = json.as_object().unwrap();

        assert!(map.values().all(|v| v == UNAVAILABLE));
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn wireless_fields_come_and_go_together() {
        let mut snapshot = full_snapshot();
        snapshot.wireless = None;

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["wireless_ip"], UNAVAILABLE);
        assert_eq!(json["wireless_ssid"], UNAVAILABLE);
        // Unrelated fields unaffected.
        assert_eq!(json["wired_ip"], "10.0.0.5");
    }

    #[test]
    fn display_shows_all_four_fields() {
        let text = full_snapshot().to_string();

        assert_eq!(
            text,
            "wired: 10.0.0.5, wireless: 192.168.0.9 (Lab), mdns: printer1.local"
        );
    }
}
