use airwave::error::AirwaveError;
use airwave::model::LinkQuality;
use airwave::parsers::{ip_link, iw, iwconfig, iwlist, proc_wireless};

const IW_SCAN: &str = "\
BSS 66:77:88:99:aa:bb(on wlan0) -- associated
    last seen: 1234.567s [boottime]
    freq: 2412
    signal: -60.00 dBm
    BSS Load:
         * station count: 4
    SSID: GuestNetwork
BSS aa:bb:cc:dd:ee:ff(on wlan0)
    freq: 5180
    signal: -72.00 dBm
    SSID:
";

const IWLIST_SCAN: &str = "\
wlan0     Scan completed :
          Cell 01 - Address: 66:77:88:99:AA:BB
                    Channel:1
                    Frequency:2.412 GHz (Channel 1)
                    Quality=40/70  Signal level=-60 dBm
                    ESSID:\"GuestNetwork\"
          Cell 02 - Address: AA:BB:CC:DD:EE:FF
                    Frequency:5.18 GHz
                    Quality=30/70  Signal level=-75 dBm
                    ESSID:\"\"
          Cell 03 - Address: garbage
                    ESSID:\"DroppedWithItsBlock\"
";

// ---------------------------------------------------------------------------
// iw scan
// ---------------------------------------------------------------------------

#[test]
fn iw_scan_yields_one_record_per_bss_block() {
    let networks = iw::parse_scan(IW_SCAN).unwrap();
    assert_eq!(networks.len(), 2);
    for network in &networks {
        assert!(!network.bssid.is_empty());
    }
    assert_eq!(networks[0].bssid, "66:77:88:99:aa:bb");
    assert_eq!(networks[1].bssid, "aa:bb:cc:dd:ee:ff");
}

#[test]
fn iw_scan_extracts_fields_and_keeps_tool_order() {
    let networks = iw::parse_scan(IW_SCAN).unwrap();
    assert_eq!(networks[0].ssid.as_deref(), Some("GuestNetwork"));
    assert_eq!(networks[0].frequency, Some(2412.0));
    assert_eq!(networks[0].signal, Some(-60));
    // hidden network: ssid present but empty
    assert_eq!(networks[1].ssid.as_deref(), Some(""));
    assert_eq!(networks[1].frequency, Some(5180.0));
    assert_eq!(networks[1].signal, Some(-72));
}

#[test]
fn iw_scan_bss_load_element_does_not_close_the_open_record() {
    // SSID appears after the "BSS Load:" line in the first block; it must
    // still land on that block's record.
    let networks = iw::parse_scan(IW_SCAN).unwrap();
    assert_eq!(networks[0].ssid.as_deref(), Some("GuestNetwork"));
}

#[test]
fn iw_scan_is_idempotent() {
    assert_eq!(iw::parse_scan(IW_SCAN).unwrap(), iw::parse_scan(IW_SCAN).unwrap());
}

#[test]
fn iw_scan_rejects_empty_output() {
    assert!(matches!(
        iw::parse_scan(""),
        Err(AirwaveError::ParseFailed { .. })
    ));
    assert!(matches!(
        iw::parse_scan("not a scan at all\n"),
        Err(AirwaveError::ParseFailed { .. })
    ));
}

// ---------------------------------------------------------------------------
// iwlist scan
// ---------------------------------------------------------------------------

#[test]
fn iwlist_scan_drops_cells_without_a_recoverable_mac() {
    let networks = iwlist::parse_scan(IWLIST_SCAN).unwrap();
    assert_eq!(networks.len(), 2);
    assert!(networks.iter().all(|n| !n.bssid.is_empty()));
    assert!(networks.iter().all(|n| n.ssid.as_deref() != Some("DroppedWithItsBlock")));
}

#[test]
fn iwlist_scan_extracts_fields() {
    let networks = iwlist::parse_scan(IWLIST_SCAN).unwrap();
    assert_eq!(networks[0].bssid, "66:77:88:99:AA:BB");
    assert_eq!(networks[0].ssid.as_deref(), Some("GuestNetwork"));
    assert_eq!(networks[0].signal, Some(-60));
    assert_eq!(networks[1].ssid.as_deref(), Some(""));
    assert_eq!(networks[1].signal, Some(-75));
}

#[test]
fn frequency_units_normalize_to_the_same_mhz_value() {
    // "Frequency:2.412 GHz" (iwlist) and "freq: 2412" (iw) must store the
    // identical value.
    let from_iwlist = iwlist::parse_scan(IWLIST_SCAN).unwrap()[0].frequency;
    let from_iw = iw::parse_scan(IW_SCAN).unwrap()[0].frequency;
    assert_eq!(from_iwlist, Some(2412.0));
    assert_eq!(from_iw, Some(2412.0));
    assert_eq!(iwlist::parse_scan(IWLIST_SCAN).unwrap()[1].frequency, Some(5180.0));
}

#[test]
fn iwlist_scan_is_idempotent() {
    assert_eq!(
        iwlist::parse_scan(IWLIST_SCAN).unwrap(),
        iwlist::parse_scan(IWLIST_SCAN).unwrap()
    );
}

// ---------------------------------------------------------------------------
// iwconfig status
// ---------------------------------------------------------------------------

#[test]
fn iwconfig_status_parses_a_fully_populated_line() {
    let text = "ESSID:\"GuestNetwork\"  Access Point: 66:77:88:99:AA:BB  \
                Bit Rate=300 Mb/s  Link Quality=40/70  Signal level=-60 dBm";
    let status = iwconfig::parse_status(text, "wlan0").unwrap();

    assert_eq!(status.interface, "wlan0");
    assert_eq!(status.ssid.as_deref(), Some("GuestNetwork"));
    assert_eq!(status.access_point.as_deref(), Some("66:77:88:99:AA:BB"));
    assert_eq!(status.bit_rate, Some(300.0));
    assert_eq!(status.link_quality, Some(LinkQuality { current: 40, max: 70 }));
    assert_eq!(status.signal_level, Some(-60));
}

#[test]
fn iwconfig_status_populates_exactly_the_fields_present() {
    let text = "\
wlan0     IEEE 802.11  ESSID:\"Home\"
          Bit Rate=54 Mb/s   Tx-Power=20 dBm
          Signal level=-48 dBm
";
    let status = iwconfig::parse_status(text, "wlan0").unwrap();
    assert_eq!(status.ssid.as_deref(), Some("Home"));
    assert_eq!(status.bit_rate, Some(54.0));
    assert_eq!(status.signal_level, Some(-48));
    assert_eq!(status.access_point, None);
    assert_eq!(status.link_quality, None);

    // absent fields serialize as explicit null, never dropped
    let value = serde_json::to_value(&status).unwrap();
    assert!(value.get("access_point").is_some());
    assert!(value["access_point"].is_null());
    assert!(value["link_quality"].is_null());
}

#[test]
fn iwconfig_status_leaves_unassociated_fields_unknown() {
    let text = "\
wlan0     IEEE 802.11  ESSID:off/any
          Mode:Managed  Access Point: Not-Associated   Tx-Power=20 dBm
          Retry short limit:7   RTS thr:off   Fragment thr:off
";
    let status = iwconfig::parse_status(text, "wlan0").unwrap();
    assert_eq!(status.ssid, None);
    assert_eq!(status.access_point, None);
    assert_eq!(status.bit_rate, None);
    assert_eq!(status.link_quality, None);
    assert_eq!(status.signal_level, None);
}

#[test]
fn iwconfig_status_rejects_empty_output() {
    assert!(matches!(
        iwconfig::parse_status("", "wlan0"),
        Err(AirwaveError::ParseFailed { .. })
    ));
}

#[test]
fn first_wireless_name_picks_the_80211_header() {
    let text = "\
lo        no wireless extensions.

eth0      no wireless extensions.

wlan0     IEEE 802.11  ESSID:off/any
          Mode:Managed
";
    assert_eq!(iwconfig::first_wireless_name(text).as_deref(), Some("wlan0"));
    assert_eq!(iwconfig::first_wireless_name("eth0   no wireless extensions.\n"), None);
}

// ---------------------------------------------------------------------------
// ip link
// ---------------------------------------------------------------------------

#[test]
fn ip_link_parses_names_and_admin_state() {
    let text = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN mode DEFAULT group default qlen 1000
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00
2: eth0: <NO-CARRIER,BROADCAST,MULTICAST> mtu 1500 qdisc mq state DOWN mode DEFAULT group default qlen 1000
    link/ether aa:bb:cc:dd:ee:01 brd ff:ff:ff:ff:ff:ff
3: wlan0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc noqueue state UP mode DORMANT group default qlen 1000
    link/ether aa:bb:cc:dd:ee:02 brd ff:ff:ff:ff:ff:ff
4: veth1@if5: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc noqueue state UP mode DEFAULT group default
";
    let entries = ip_link::parse_links(text).unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].name, "lo");
    assert!(entries[0].up);
    assert_eq!(entries[1].name, "eth0");
    assert!(!entries[1].up);
    assert_eq!(entries[2].name, "wlan0");
    assert!(entries[2].up);
    // VLAN suffix stripped
    assert_eq!(entries[3].name, "veth1");
}

#[test]
fn ip_link_down_link_with_lower_up_style_flags_stays_down() {
    // Exact-flag matching: "SETUP"-like tokens or LOWER_UP must not count
    // as administratively up.
    let text = "2: eth0: <NO-CARRIER,BROADCAST,MULTICAST,LOWER_UP> mtu 1500\n";
    let entries = ip_link::parse_links(text).unwrap();
    assert!(!entries[0].up);
}

#[test]
fn ip_link_rejects_empty_output() {
    assert!(matches!(
        ip_link::parse_links(""),
        Err(AirwaveError::ParseFailed { .. })
    ));
}

// ---------------------------------------------------------------------------
// /proc/net/wireless
// ---------------------------------------------------------------------------

const PROC_WIRELESS: &str = "\
Inter-| sta-|   Quality        |   Discarded packets               | Missed | WE
 face | tus | link level noise |  nwid  crypt   frag  retry   misc | beacon | 22
 wlan0: 0000   40.  -60.  -256        0      0      0      0      0        0
";

#[test]
fn proc_wireless_extracts_the_interface_row() {
    let stats = proc_wireless::parse_stats(PROC_WIRELESS, "wlan0").unwrap();
    assert_eq!(stats.status, "0000");
    assert_eq!(stats.quality, Some(40));
    assert_eq!(stats.signal_dbm, Some(-60));
    assert_eq!(stats.noise_dbm, Some(-256));
}

#[test]
fn proc_wireless_missing_row_is_no_data_not_an_error() {
    assert!(proc_wireless::parse_stats(PROC_WIRELESS, "wlan1").is_none());
    assert!(proc_wireless::parse_stats("", "wlan0").is_none());
}
