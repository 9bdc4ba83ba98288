use airwave::config::Config;
use airwave::error::AirwaveError;
use airwave::model::{LinkQuality, NetworkRecord, ScanResult};
use airwave::parsers::OperationKind;
use airwave::response::{ResponseMetadata, WifiToolResponse};

#[test]
fn response_success_serializes_correctly() {
    let response = WifiToolResponse::success(
        "{\"interface\": \"wlan0\"}".to_string(),
        ResponseMetadata {
            tool_name: "get_wifi_status".to_string(),
            duration_seconds: 0.42,
        },
    );

    let json_str = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["content"], "{\"interface\": \"wlan0\"}");
    assert_eq!(parsed["content_type"], "json");
    assert_eq!(parsed["metadata"]["tool_name"], "get_wifi_status");
    assert!(parsed["metadata"]["duration_seconds"].is_f64());
}

#[test]
fn response_error_serializes_correctly() {
    let response = WifiToolResponse::error(
        "no wireless interface found".to_string(),
        ResponseMetadata {
            tool_name: "scan_wifi".to_string(),
            duration_seconds: 0.001,
        },
    );

    let json_str = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

    assert_eq!(parsed["status"], "error");
    assert_eq!(parsed["content"], "no wireless interface found");
    assert_eq!(parsed["content_type"], "text");
}

#[test]
fn non_finite_duration_clamps_to_zero() {
    let response = WifiToolResponse::success(
        "{}".to_string(),
        ResponseMetadata {
            tool_name: "scan_wifi".to_string(),
            duration_seconds: f64::NAN,
        },
    );
    let parsed: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
    assert_eq!(parsed["metadata"]["duration_seconds"], 0.0);
}

#[test]
fn scan_result_serializes_absent_fields_as_null() {
    let result = ScanResult {
        interface: "wlan0".to_string(),
        networks: vec![NetworkRecord::new("66:77:88:99:AA:BB")],
        scan_time: 1700000000.0,
    };
    let value = serde_json::to_value(&result).unwrap();

    let network = &value["networks"][0];
    assert_eq!(network["bssid"], "66:77:88:99:AA:BB");
    assert!(network.get("ssid").is_some());
    assert!(network["ssid"].is_null());
    assert!(network["frequency"].is_null());
    assert!(network["signal"].is_null());
}

#[test]
fn link_quality_serializes_as_current_max_pair() {
    let value = serde_json::to_value(LinkQuality { current: 40, max: 70 }).unwrap();
    assert_eq!(value["current"], 40);
    assert_eq!(value["max"], 70);
}

#[test]
fn tool_not_found_message_names_every_candidate() {
    let err = AirwaveError::ToolNotFound {
        tried: vec!["iw".to_string(), "iwlist".to_string()],
    };
    let msg = err.user_message();
    assert!(msg.contains("iw"));
    assert!(msg.contains("iwlist"));
}

#[test]
fn execution_failed_message_keeps_the_stderr_tail() {
    let stderr = format!("{}the actual error", "banner line\n".repeat(50));
    let err = AirwaveError::ExecutionFailed {
        tool: "iw".to_string(),
        code: 255,
        stderr,
    };
    let msg = err.user_message();
    assert!(msg.contains("the actual error"));
    assert!(msg.contains("..."));
    assert!(msg.len() < 300);
}

#[test]
fn parse_failed_message_names_the_operation_not_the_text() {
    let err = AirwaveError::ParseFailed {
        operation: OperationKind::Scan,
        message: "no BSS blocks in iw scan output".to_string(),
    };
    assert_eq!(err.user_message(), "could not parse scan output");
}

#[test]
fn config_defaults_without_environment_overrides() {
    // AIRWAVE_TIMEOUT_SECS / AIRWAVE_INTERFACE are not set in the test
    // environment.
    let config = Config::from_env();
    assert_eq!(config.command_timeout.as_secs(), 10);
    assert_eq!(config.default_interface, None);
}
