//! Integration tests for MCP protocol handling.
//!
//! These tests verify JSON-RPC 2.0 message parsing and the shape of tool
//! results as seen by a client.

use serde_json::json;
use wordpress_mcp::mcp::protocol::{parse_message, IncomingMessage, RequestId};
use wordpress_mcp::mcp::server::{ToolCallParams, ToolCallResult};

// =============================================================================
// Protocol Parsing Tests
// =============================================================================

#[test]
fn test_parse_initialize_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {
                "name": "test-client",
                "version": "1.0.0"
            }
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "initialize");
        assert_eq!(req.id, RequestId::Number(1));
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_tools_call_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": "call-7",
        "method": "tools/call",
        "params": {
            "name": "wp_list_posts",
            "arguments": { "per_page": 5, "status": "publish" }
        }
    }"#;

    let IncomingMessage::Request(req) = parse_message(json).unwrap() else {
        panic!("Expected Request");
    };
    assert_eq!(req.method, "tools/call");
    assert_eq!(req.id, RequestId::String("call-7".to_string()));

    let params: ToolCallParams = serde_json::from_value(req.params.unwrap()).unwrap();
    assert_eq!(params.name, "wp_list_posts");
    assert_eq!(params.arguments["per_page"], 5);
}

#[test]
fn test_tools_call_without_arguments() {
    let params: ToolCallParams = serde_json::from_value(json!({"name": "wp_me"})).unwrap();
    assert!(params.arguments.is_null());
}

#[test]
fn test_parse_notification() {
    let json = r#"{
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Notification(notif) = result.unwrap() {
        assert_eq!(notif.method, "notifications/initialized");
    } else {
        panic!("Expected Notification");
    }
}

#[test]
fn test_parse_invalid_json() {
    let result = parse_message("not valid json");
    assert!(result.is_err());
}

#[test]
fn test_parse_missing_jsonrpc_version() {
    let json = r#"{
        "id": 1,
        "method": "test"
    }"#;

    let result = parse_message(json);
    assert!(result.is_err());
}

// =============================================================================
// Tool Result Envelope Tests
// =============================================================================

#[test]
fn test_text_result_envelope() {
    let value = serde_json::to_value(ToolCallResult::text(r#"{"id":1}"#)).unwrap();
    assert_eq!(
        value,
        json!({ "content": [{ "type": "text", "text": "{\"id\":1}" }] })
    );
}

#[test]
fn test_error_result_envelope() {
    let value = serde_json::to_value(ToolCallResult::error("WordPress API error 404: nope")).unwrap();
    assert_eq!(value["isError"], true);
    assert_eq!(value["content"][0]["text"], "WordPress API error 404: nope");
}
