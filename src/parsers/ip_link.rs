use crate::error::AirwaveError;
use crate::parsers::OperationKind;

/// One interface header line from `ip link show`: name plus whether the
/// flag set carries `UP`. Wireless classification happens in the
/// operation layer (it needs a tool probe, not text).
#[derive(Debug, Clone, PartialEq)]
pub struct LinkEntry {
    pub name: String,
    pub up: bool,
}

/// Parses `ip link show` output.
///
/// Header lines are non-indented `N: name: <FLAG,FLAG,...> ...`;
/// continuation lines (addresses) are indented and skipped. VLAN-style
/// `name@parent` suffixes are stripped.
pub fn parse_links(output: &str) -> Result<Vec<LinkEntry>, AirwaveError> {
    let mut entries = Vec::new();

    for line in output.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let mut parts = line.splitn(3, ": ");
        let Some(index) = parts.next() else {
            continue;
        };
        if index.parse::<u32>().is_err() {
            continue;
        }
        let Some(name_part) = parts.next() else {
            continue;
        };
        let name = name_part.split('@').next().unwrap_or(name_part).trim();
        if name.is_empty() {
            continue;
        }
        entries.push(LinkEntry {
            name: name.to_string(),
            up: is_admin_up(line),
        });
    }

    if entries.is_empty() {
        return Err(AirwaveError::ParseFailed {
            operation: OperationKind::Interfaces,
            message: "no interfaces in ip link output".to_string(),
        });
    }
    Ok(entries)
}

/// The exact flag `UP` inside `<...>`. A substring test would also match
/// `LOWER_UP` on links that are administratively down.
fn is_admin_up(line: &str) -> bool {
    let Some(start) = line.find('<') else {
        return false;
    };
    let Some(end) = line[start..].find('>') else {
        return false;
    };
    line[start + 1..start + end]
        .split(',')
        .any(|flag| flag == "UP")
}
