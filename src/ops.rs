use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AirwaveError;
use crate::model::{
    ConnectionStatus, InterfaceDescriptor, LinkState, ScanResult, SignalReport,
};
use crate::parsers;
use crate::runner::{CommandRunner, Invocation};

const PROC_WIRELESS: &str = "/proc/net/wireless";

/// Probed in order when no interface is named and none is discoverable
/// from iwconfig output.
const COMMON_INTERFACES: &[&str] = &["wlan0", "wlp2s0", "wifi0"];

/// The wifi inspection operations. Stateless: every call captures fresh
/// command output and builds records from scratch, so one instance can
/// serve concurrent requests (each spawns its own child process).
pub struct WifiOps {
    runner: CommandRunner,
    default_interface: Option<String>,
}

impl WifiOps {
    pub fn new(runner: CommandRunner, default_interface: Option<String>) -> Self {
        Self {
            runner,
            default_interface,
        }
    }

    /// Scan for nearby networks: `iw dev <if> scan`, or `iwlist <if> scan`
    /// when iw is not installed.
    pub async fn scan(&self, interface: Option<&str>) -> Result<ScanResult, AirwaveError> {
        let iface = self.resolve_interface(interface).await?;
        let candidates = [
            Invocation {
                tool: "iw",
                args: vec!["dev".to_string(), iface.clone(), "scan".to_string()],
            },
            Invocation {
                tool: "iwlist",
                args: vec![iface.clone(), "scan".to_string()],
            },
        ];

        let output = self.runner.run_first(&candidates).await?;
        let networks = match output.tool {
            "iw" => parsers::iw::parse_scan(&output.stdout)?,
            _ => parsers::iwlist::parse_scan(&output.stdout)?,
        };

        Ok(ScanResult {
            interface: iface,
            networks,
            scan_time: unix_now(),
        })
    }

    /// Current association state from `iwconfig <if>`.
    pub async fn status(&self, interface: Option<&str>) -> Result<ConnectionStatus, AirwaveError> {
        let iface = self.resolve_interface(interface).await?;
        let output = self.run_iwconfig(&iface).await?;
        parsers::iwconfig::parse_status(&output, &iface)
    }

    /// Quality/level subset of [`WifiOps::status`], supplemented with
    /// kernel counters when `/proc/net/wireless` is readable.
    pub async fn signal(&self, interface: Option<&str>) -> Result<SignalReport, AirwaveError> {
        let status = self.status(interface).await?;

        let wireless_stats = match tokio::fs::read_to_string(PROC_WIRELESS).await {
            Ok(content) => parsers::proc_wireless::parse_stats(&content, &status.interface),
            Err(e) => {
                tracing::debug!("{PROC_WIRELESS} unavailable: {e}");
                None
            }
        };

        Ok(SignalReport {
            interface: status.interface,
            link_quality: status.link_quality,
            signal_level: status.signal_level,
            wireless_stats,
        })
    }

    /// All network interfaces from `ip link show`, each probed with
    /// iwconfig to classify it as wireless or not.
    pub async fn list_interfaces(&self) -> Result<Vec<InterfaceDescriptor>, AirwaveError> {
        let candidates = [Invocation {
            tool: "ip",
            args: vec!["link".to_string(), "show".to_string()],
        }];
        let output = self.runner.run_first(&candidates).await?;
        let entries = parsers::ip_link::parse_links(&output.stdout)?;

        let mut interfaces = Vec::with_capacity(entries.len());
        for entry in entries {
            // Probe success = wireless. A failed probe (non-wireless
            // interface, missing tool) just classifies it as other.
            let is_wireless = self.run_iwconfig(&entry.name).await.is_ok();
            interfaces.push(InterfaceDescriptor {
                name: entry.name,
                is_wireless,
                status: if entry.up {
                    LinkState::Up
                } else {
                    LinkState::Down
                },
            });
        }
        Ok(interfaces)
    }

    /// An explicit non-empty name wins, then the configured default, then
    /// the first interface iwconfig reports as 802.11, then the common
    /// names probed one by one.
    async fn resolve_interface(&self, explicit: Option<&str>) -> Result<String, AirwaveError> {
        if let Some(name) = explicit
            && !name.is_empty()
        {
            return Ok(name.to_string());
        }
        if let Some(name) = &self.default_interface {
            return Ok(name.clone());
        }

        if let Ok(output) = self.run_iwconfig_all().await
            && let Some(name) = parsers::iwconfig::first_wireless_name(&output)
        {
            return Ok(name);
        }

        for name in COMMON_INTERFACES {
            if self.run_iwconfig(name).await.is_ok() {
                return Ok((*name).to_string());
            }
        }

        Err(AirwaveError::NoInterfaceFound)
    }

    async fn run_iwconfig(&self, iface: &str) -> Result<String, AirwaveError> {
        let candidates = [Invocation {
            tool: "iwconfig",
            args: vec![iface.to_string()],
        }];
        Ok(self.runner.run_first(&candidates).await?.stdout)
    }

    async fn run_iwconfig_all(&self) -> Result<String, AirwaveError> {
        let candidates = [Invocation {
            tool: "iwconfig",
            args: vec![],
        }];
        Ok(self.runner.run_first(&candidates).await?.stdout)
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
