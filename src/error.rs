use thiserror::Error;

use crate::parsers::OperationKind;

#[derive(Debug, Error)]
pub enum AirwaveError {
    #[error("no usable tool on path (tried {})", .tried.join(", "))]
    ToolNotFound { tried: Vec<String> },

    #[error("{tool} exited with code {code}: {stderr}")]
    ExecutionFailed {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("timeout after {0}ms")]
    Timeout(u64),

    #[error("unparseable {operation} output: {message}")]
    ParseFailed {
        operation: OperationKind,
        message: String,
    },

    #[error("no wireless interface found")]
    NoInterfaceFound,

    #[error("{0}")]
    Other(String),
}

impl AirwaveError {
    /// Produce a sanitized error message safe for returning to MCP clients.
    /// Full detail (complete stderr, parse context) stays in the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::ToolNotFound { tried } => {
                format!(
                    "none of the required utilities are installed: {}",
                    tried.join(", ")
                )
            }
            Self::ExecutionFailed { tool, code, stderr } => {
                if stderr.trim().is_empty() {
                    format!("{tool} exited with code {code}")
                } else {
                    // Take the tail: wireless tools print usage banners first,
                    // the actual error is at the end.
                    let preview: String = stderr
                        .chars()
                        .rev()
                        .take(200)
                        .collect::<Vec<_>>()
                        .into_iter()
                        .rev()
                        .collect();
                    let prefix = if preview.len() < stderr.len() {
                        "..."
                    } else {
                        ""
                    };
                    format!("{tool} exited with code {code}: {prefix}{}", preview.trim())
                }
            }
            Self::Timeout(ms) => format!("command timed out after {ms}ms"),
            Self::ParseFailed { operation, .. } => {
                format!("could not parse {operation} output")
            }
            Self::NoInterfaceFound => "no wireless interface found".to_string(),
            Self::Other(msg) => msg.clone(),
        }
    }
}
