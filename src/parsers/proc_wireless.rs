use crate::model::WirelessStats;

/// Extracts the row for `interface` from `/proc/net/wireless`.
///
/// Row shape after the two header lines:
/// `wlan0: 0000   40.  -60.  -256        0      0 ...`
/// Quality columns carry a trailing `.`; a missing row (interface down or
/// not wireless) is simply no data, never an error.
pub fn parse_stats(content: &str, interface: &str) -> Option<WirelessStats> {
    let label = format!("{interface}:");
    let line = content
        .lines()
        .find(|l| l.split_whitespace().next() == Some(label.as_str()))?;

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return None;
    }

    Some(WirelessStats {
        status: parts[1].to_string(),
        quality: column_value(parts[2]).map(|v| v.round() as u32),
        signal_dbm: column_value(parts[3]).map(|v| v.round() as i32),
        noise_dbm: parts.get(4).and_then(|p| column_value(p)).map(|v| v.round() as i32),
    })
}

fn column_value(column: &str) -> Option<f64> {
    column.trim_end_matches('.').parse().ok()
}
