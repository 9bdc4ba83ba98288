use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct StatusRequest {
    /// Wi-Fi interface name (optional)
    pub interface: Option<String>,
}
