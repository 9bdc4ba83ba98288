use crate::error::AirwaveError;
use crate::model::{ConnectionStatus, LinkQuality};
use crate::parsers::{OperationKind, field_after, is_mac, leading_dbm, leading_f64, leading_number};

/// One field recognized in `iwconfig` output.
#[derive(Debug, PartialEq)]
enum Field {
    Ssid(String),
    AccessPoint(String),
    BitRate(f64),
    Quality(LinkQuality),
    SignalLevel(i32),
}

/// Named extractors, one per field. Each recognizes its label anywhere in
/// a line and yields the parsed value; the first match per field wins.
const EXTRACTORS: &[fn(&str) -> Option<Field>] =
    &[essid, access_point, bit_rate, link_quality, signal_level];

/// Parses `iwconfig <if>` output into a [`ConnectionStatus`].
///
/// An unassociated interface prints `ESSID:off/any` and
/// `Access Point: Not-Associated`; neither matches its extractor, so the
/// fields stay unknown rather than carrying sentinel text.
pub fn parse_status(output: &str, interface: &str) -> Result<ConnectionStatus, AirwaveError> {
    if output.trim().is_empty() {
        return Err(AirwaveError::ParseFailed {
            operation: OperationKind::Status,
            message: "empty iwconfig output".to_string(),
        });
    }

    let mut status = ConnectionStatus::unknown(interface);
    for line in output.lines() {
        for extract in EXTRACTORS {
            if let Some(field) = extract(line) {
                apply(&mut status, field);
            }
        }
    }
    Ok(status)
}

/// First interface name in whole-system `iwconfig` output reporting 802.11.
pub fn first_wireless_name(output: &str) -> Option<String> {
    output
        .lines()
        .find(|l| l.contains("IEEE 802.11") && !l.starts_with(char::is_whitespace))
        .and_then(|l| l.split_whitespace().next())
        .map(str::to_string)
}

fn apply(status: &mut ConnectionStatus, field: Field) {
    match field {
        Field::Ssid(v) => {
            if status.ssid.is_none() {
                status.ssid = Some(v);
            }
        }
        Field::AccessPoint(v) => {
            if status.access_point.is_none() {
                status.access_point = Some(v);
            }
        }
        Field::BitRate(v) => {
            if status.bit_rate.is_none() {
                status.bit_rate = Some(v);
            }
        }
        Field::Quality(v) => {
            if status.link_quality.is_none() {
                status.link_quality = Some(v);
            }
        }
        Field::SignalLevel(v) => {
            if status.signal_level.is_none() {
                status.signal_level = Some(v);
            }
        }
    }
}

fn essid(line: &str) -> Option<Field> {
    let rest = field_after(line, "ESSID:")?.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(Field::Ssid(rest[..end].to_string()))
}

fn access_point(line: &str) -> Option<Field> {
    let token = field_after(line, "Access Point:")?.split_whitespace().next()?;
    is_mac(token).then(|| Field::AccessPoint(token.to_string()))
}

fn bit_rate(line: &str) -> Option<Field> {
    let rest = field_after(line, "Bit Rate=")?;
    leading_f64(rest).map(Field::BitRate)
}

fn link_quality(line: &str) -> Option<Field> {
    let rest = field_after(line, "Link Quality=")?;
    let (current, rest) = rest.split_once('/')?;
    let current: u32 = current.trim().parse().ok()?;
    let max: u32 = leading_number(rest)?.parse().ok()?;
    Some(Field::Quality(LinkQuality { current, max }))
}

fn signal_level(line: &str) -> Option<Field> {
    let rest = field_after(line, "Signal level=")?;
    leading_dbm(rest).map(Field::SignalLevel)
}
