use std::env;
use std::time::Duration;

/// Default per-invocation timeout. A scan on a busy radio takes a few
/// seconds; 10s covers it without letting a wedged tool hang a request.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    /// Upper bound on any single tool invocation.
    pub command_timeout: Duration,
    /// Pinned wireless interface; when unset, each request auto-detects.
    pub default_interface: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let command_timeout = match env::var("AIRWAVE_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "AIRWAVE_TIMEOUT_SECS={raw} is not a positive integer, using {DEFAULT_TIMEOUT_SECS}s"
                    );
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let default_interface = env::var("AIRWAVE_INTERFACE")
            .ok()
            .filter(|name| !name.is_empty());
        if let Some(ref name) = default_interface {
            tracing::info!("default interface pinned to {name}");
        }

        Config {
            command_timeout,
            default_interface,
        }
    }
}
