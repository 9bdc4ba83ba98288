use std::sync::Arc;
use std::time::Instant;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use crate::config::Config;
use crate::error::AirwaveError;
use crate::model::InterfaceList;
use crate::ops::WifiOps;
use crate::response::{ResponseMetadata, WifiToolResponse};
use crate::runner::{CommandRunner, PathLocator};
use crate::tools::scan::ScanRequest;
use crate::tools::signal::SignalRequest;
use crate::tools::status::StatusRequest;

#[derive(Clone)]
pub struct AirwaveServer {
    ops: Arc<WifiOps>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AirwaveServer {
    pub fn new(config: Config) -> Self {
        let runner = CommandRunner::new(
            Box::new(PathLocator::from_env()),
            config.command_timeout,
        );
        let ops = Arc::new(WifiOps::new(runner, config.default_interface));
        Self {
            ops,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "scan_wifi",
        description = "Scan for available Wi-Fi networks",
        annotations(read_only_hint = true)
    )]
    async fn scan_wifi(
        &self,
        Parameters(req): Parameters<ScanRequest>,
    ) -> Result<CallToolResult, McpError> {
        let start = Instant::now();
        let outcome = self.ops.scan(req.interface.as_deref()).await;
        Ok(render("scan_wifi", outcome, start))
    }

    #[tool(
        name = "get_wifi_status",
        description = "Get current Wi-Fi connection status",
        annotations(read_only_hint = true)
    )]
    async fn get_wifi_status(
        &self,
        Parameters(req): Parameters<StatusRequest>,
    ) -> Result<CallToolResult, McpError> {
        let start = Instant::now();
        let outcome = self.ops.status(req.interface.as_deref()).await;
        Ok(render("get_wifi_status", outcome, start))
    }

    #[tool(
        name = "get_signal_strength",
        description = "Get signal strength and quality metrics",
        annotations(read_only_hint = true)
    )]
    async fn get_signal_strength(
        &self,
        Parameters(req): Parameters<SignalRequest>,
    ) -> Result<CallToolResult, McpError> {
        let start = Instant::now();
        let outcome = self.ops.signal(req.interface.as_deref()).await;
        Ok(render("get_signal_strength", outcome, start))
    }

    #[tool(
        name = "list_interfaces",
        description = "List all available network interfaces",
        annotations(read_only_hint = true)
    )]
    async fn list_interfaces(&self) -> Result<CallToolResult, McpError> {
        let start = Instant::now();
        let outcome = self
            .ops
            .list_interfaces()
            .await
            .map(|interfaces| InterfaceList { interfaces });
        Ok(render("list_interfaces", outcome, start))
    }
}

/// Render an operation outcome as the response envelope: the record as
/// pretty JSON on success, a sanitized message on failure.
fn render<T: Serialize>(
    tool_name: &str,
    outcome: Result<T, AirwaveError>,
    start: Instant,
) -> CallToolResult {
    let metadata = ResponseMetadata {
        tool_name: tool_name.to_string(),
        duration_seconds: start.elapsed().as_secs_f64(),
    };
    let response = match outcome {
        Ok(record) => match serde_json::to_string_pretty(&record) {
            Ok(json) => WifiToolResponse::success(json, metadata),
            Err(e) => WifiToolResponse::error(format!("serialization failed: {e}"), metadata),
        },
        Err(e) => {
            tracing::warn!("{tool_name} failed: {e}");
            WifiToolResponse::error(e.user_message(), metadata)
        }
    };
    response.into_call_tool_result()
}

#[tool_handler]
impl ServerHandler for AirwaveServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "airwave".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Airwave: host Wi-Fi inspection.\n\n\
                 Tools:\n\
                 - `scan_wifi` lists nearby networks (SSID, BSSID, frequency MHz, signal dBm).\n\
                 - `get_wifi_status` reports the current association (SSID, access point, bit rate, link quality, signal level).\n\
                 - `get_signal_strength` reports link quality and signal level, plus kernel counters when available.\n\
                 - `list_interfaces` inventories network interfaces with wireless/other and UP/DOWN state.\n\n\
                 All tools accept an optional `interface`; omit it to auto-detect the first wireless interface.\n\
                 Scanning usually needs elevated privileges; a permission error is reported in the response envelope."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
