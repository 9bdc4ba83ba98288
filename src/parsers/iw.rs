use crate::error::AirwaveError;
use crate::model::NetworkRecord;
use crate::parsers::{OperationKind, field_after, is_mac, leading_dbm, leading_f64};

/// Parses `iw dev <if> scan` output.
///
/// A `BSS <mac>(on wlan0)` line opens a record; indented attribute lines
/// fill it. `iw` also prints information elements whose names start with
/// "BSS" (`BSS Load:`); those are not delimiters and must not close the
/// open record, so a line only delimits when its token is a MAC address.
pub fn parse_scan(output: &str) -> Result<Vec<NetworkRecord>, AirwaveError> {
    let mut networks: Vec<NetworkRecord> = Vec::new();
    let mut current: Option<NetworkRecord> = None;

    for raw in output.lines() {
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix("BSS ") {
            let token = rest
                .split_whitespace()
                .next()
                .unwrap_or("")
                .split('(')
                .next()
                .unwrap_or("")
                .trim_end_matches(':');
            if is_mac(token) {
                if let Some(done) = current.take() {
                    networks.push(done);
                }
                current = Some(NetworkRecord::new(token));
            }
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
            message: "no BSS blocks in iw scan output".to_string(),
        });
    }
    Ok(networks)
}

/// Per-field extractors, applied to every attribute line of a block.
/// Each recognizes one label and fills its field on first match.
const FIELDS: &[fn(&str, &mut NetworkRecord)] = &[ssid, signal, frequency];

fn ssid(line: &str, record: &mut NetworkRecord) {
    if record.ssid.is_none()
        && let Some(rest) = field_after(line, "SSID:")
    {
        record.ssid = Some(rest.to_string());
    }
}

fn signal(line: &str, record: &mut NetworkRecord) {
    if record.signal.is_none()
        && let Some(rest) = field_after(line, "signal:")
    {
        record.signal = leading_dbm(rest);
    }
}

fn frequency(line: &str, record: &mut NetworkRecord) {
    if record.frequency.is_none()
        && let Some(rest) = field_after(line, "freq:")
    {
        // iw reports MHz directly (fractional on newer versions).
        record.frequency = leading_f64(rest);
    }
}
