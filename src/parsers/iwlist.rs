use crate::error::AirwaveError;
use crate::model::NetworkRecord;
use crate::parsers::{OperationKind, field_after, is_mac, leading_dbm, leading_f64};

/// Parses `iwlist <if> scan` output (the legacy wireless-tools scanner).
///
/// A `Cell NN - Address: <MAC>` line opens a record. Frequencies are
/// reported in GHz and normalized to MHz so both scanners store the same
/// value for the same channel.
pub fn parse_scan(output: &str) -> Result<Vec<NetworkRecord>, AirwaveError> {
    let mut networks: Vec<NetworkRecord> = Vec::new();
    let mut current: Option<NetworkRecord> = None;

    for raw in output.lines() {
        let line = raw.trim();

        if line.starts_with("Cell") && line.contains("Address:") {
            let token = field_after(line, "Address:")
                .and_then(|rest| rest.split_whitespace().next())
                .unwrap_or("");
            if let Some(done) = current.take() {
                networks.push(done);
            }
            // Blocks without a recoverable MAC are dropped whole.
            current = is_mac(token).then(|| NetworkRecord::new(token));
            continue;
        }

        let Some(record) = current.as_mut() else {
            continue;
        };
        for extract in FIELDS {
            extract(line, record);
        }
    }

    if let Some(done) = current.take() {
        networks.push(done);
    }

    if networks.is_empty() {
        return Err(AirwaveError::ParseFailed {
            operation: OperationKind::Scan,
            message: "no cells in iwlist scan output".to_string(),
        });
    }
    Ok(networks)
}

const FIELDS: &[fn(&str, &mut NetworkRecord)] = &[essid, signal_level, frequency];

fn essid(line: &str, record: &mut NetworkRecord) {
    if record.ssid.is_none()
        && let Some(rest) = field_after(line, "ESSID:")
    {
        record.ssid = Some(rest.trim().trim_matches('"').to_string());
    }
}

fn signal_level(line: &str, record: &mut NetworkRecord) {
    if record.signal.is_none()
        && let Some(rest) = field_after(line, "Signal level=")
    {
        record.signal = leading_dbm(rest);
    }
}

fn frequency(line: &str, record: &mut NetworkRecord) {
    if record.frequency.is_none()
        && let Some(rest) = field_after(line, "Frequency:")
    {
        // GHz → MHz, rounded to 0.1 MHz so "2.412 GHz" stores the same
        // value as iw's "2412".
        record.frequency = leading_f64(rest).map(|ghz| (ghz * 1000.0 * 10.0).round() / 10.0);
    }
}
