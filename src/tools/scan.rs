use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScanRequest {
    /// Wi-Fi interface name (optional, defaults to auto-detect)
    pub interface: Option<String>,
}
