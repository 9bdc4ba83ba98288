use serde::Serialize;

/// One access point discovered by a scan.
///
/// Every optional field serializes as `null` when the tool did not report
/// it, so an absent reading is distinguishable from a legitimate zero or
/// negative value. A record without a BSSID is never emitted at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkRecord {
    /// Access point MAC, colon-separated hex.
    pub bssid: String,
    /// Network name; empty string for hidden networks.
    pub ssid: Option<String>,
    /// Center frequency in MHz.
    pub frequency: Option<f64>,
    /// Signal level in dBm.
    pub signal: Option<i32>,
}

impl NetworkRecord {
    pub fn new(bssid: &str) -> Self {
        Self {
            bssid: bssid.to_string(),
            ssid: None,
            frequency: None,
            signal: None,
        }
    }
}

/// Vendor-relative quality pair, kept distinct from the dBm signal level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkQuality {
    pub current: u32,
    pub max: u32,
}

/// Current association state of one interface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionStatus {
    pub interface: String,
    /// Connected SSID; `null` means not associated.
    pub ssid: Option<String>,
    /// MAC of the associated access point.
    pub access_point: Option<String>,
    /// Negotiated bit rate in Mbps.
    pub bit_rate: Option<f64>,
    pub link_quality: Option<LinkQuality>,
    /// Signal level in dBm.
    pub signal_level: Option<i32>,
}

impl ConnectionStatus {
    /// A status with every field unknown, for population by the parser.
    pub fn unknown(interface: &str) -> Self {
        Self {
            interface: interface.to_string(),
            ssid: None,
            access_point: None,
            bit_rate: None,
            link_quality: None,
            signal_level: None,
        }
    }
}

/// Result of one scan: networks in the tool's reporting order, stamped
/// with the wall-clock time of the invocation (not parsed from output).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub interface: String,
    pub networks: Vec<NetworkRecord>,
    /// Seconds since the Unix epoch.
    pub scan_time: f64,
}

/// Administrative state of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkState {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceDescriptor {
    pub name: String,
    pub is_wireless: bool,
    pub status: LinkState,
}

/// Envelope for `list_interfaces`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceList {
    pub interfaces: Vec<InterfaceDescriptor>,
}

/// Kernel-side counters from `/proc/net/wireless`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WirelessStats {
    pub status: String,
    pub quality: Option<u32>,
    pub signal_dbm: Option<i32>,
    pub noise_dbm: Option<i32>,
}

/// The quality/level subset of [`ConnectionStatus`], plus kernel counters
/// when `/proc/net/wireless` is readable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalReport {
    pub interface: String,
    pub link_quality: Option<LinkQuality>,
    pub signal_level: Option<i32>,
    pub wireless_stats: Option<WirelessStats>,
}
