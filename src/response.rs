use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Tool response envelope. The record (or error message) travels in
/// `content`; `status` tells the client which it got.
#[derive(Debug, Serialize)]
pub struct WifiToolResponse {
    pub status: &'static str,
    pub content: String,
    pub content_type: &'static str,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Serialize)]
pub struct ResponseMetadata {
    pub tool_name: String,
    #[serde(serialize_with = "serialize_finite_f64")]
    pub duration_seconds: f64,
}

/// Serialize f64, clamping non-finite values (NaN, Inf) to 0.0.
fn serialize_finite_f64<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(if v.is_finite() { *v } else { 0.0 })
}

impl WifiToolResponse {
    /// Success with a JSON-encoded record as content.
    pub fn success(content: String, metadata: ResponseMetadata) -> Self {
        Self {
            status: "success",
            content,
            content_type: "json",
            metadata,
        }
    }

    pub fn error(message: String, metadata: ResponseMetadata) -> Self {
        Self {
            status: "error",
            content: message,
            content_type: "text",
            metadata,
        }
    }

    /// Convert to MCP CallToolResult.
    /// Always success at the transport level. Failure lives in the JSON
    /// payload (`"status": "error"`) where the client can read it without
    /// aborting sibling tool calls.
    pub fn into_call_tool_result(self) -> CallToolResult {
        match serde_json::to_string(&self) {
            Ok(json) => CallToolResult::success(vec![Content::text(json)]),
            Err(e) => {
                let escaped = e.to_string().replace('\\', "\\\\").replace('"', "\\\"");
                CallToolResult::success(vec![Content::text(format!(
                    r#"{{"status":"error","content":"serialization failed: {escaped}","content_type":"text","metadata":{{}}}}"#
                ))])
            }
        }
    }
}
