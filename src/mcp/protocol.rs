//! JSON-RPC 2.0 framing for the MCP session.
//!
//! Incoming lines are classified as requests (carry an `id`) or
//! notifications (no `id`). Outgoing lines are either a success response
//! or an error response; there is no batch support.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The MCP protocol version this server speaks.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported during initialisation.
pub const SERVER_NAME: &str = "wordpress-mcp";

const JSONRPC_VERSION: &str = "2.0";

/// Request identifier. MCP forbids `null` ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

/// A request that expects exactly one response.
#[derive(Debug, Clone)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
    pub params: Option<Value>,
}

/// A one-way message from the client.
#[derive(Debug, Clone)]
pub struct JsonRpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: Option<Value>,
}

/// A parsed line from the client.
#[derive(Debug, Clone)]
pub enum IncomingMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
}

/// Wire shape shared by requests and notifications before classification.
#[derive(Deserialize)]
struct Envelope {
    jsonrpc: Option<String>,
    #[serde(default, deserialize_with = "present")]
    id: Option<Option<RequestId>>,
    method: Option<String>,
    #[serde(default)]
    params: Option<Value>,
}

/// Distinguishes `"id": null` from an absent id.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<RequestId>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<RequestId>::deserialize(deserializer).map(Some)
}

/// A successful response.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    #[must_use]
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result,
        }
    }
}

/// Standard JSON-RPC error codes used by this server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    ParseError = -32700,
    InvalidRequest = -32600,
    MethodNotFound = -32601,
    InvalidParams = -32602,
    InternalError = -32603,
}

impl ErrorCode {
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// The `error` member of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcErrorData {
    pub code: i32,
    pub message: String,
}

/// An error response. `id` is omitted when the request could not be read.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    pub error: JsonRpcErrorData,
}

impl JsonRpcError {
    /// Builds an error response with an explicit code and message.
    #[must_use]
    pub fn with_code(id: Option<RequestId>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            error: JsonRpcErrorData {
                code: code.code(),
                message: message.into(),
            },
        }
    }

    #[must_use]
    pub fn parse_error() -> Self {
        Self::with_code(None, ErrorCode::ParseError, "Parse error")
    }

    #[must_use]
    pub fn invalid_request(id: Option<RequestId>) -> Self {
        Self::with_code(id, ErrorCode::InvalidRequest, "Invalid Request")
    }

    #[must_use]
    pub fn method_not_found(id: RequestId, method: &str) -> Self {
        Self::with_code(
            Some(id),
            ErrorCode::MethodNotFound,
            format!("Method not found: {method}"),
        )
    }

    #[must_use]
    pub fn invalid_params(id: RequestId, message: impl Into<String>) -> Self {
        Self::with_code(Some(id), ErrorCode::InvalidParams, message)
    }
}

/// Parses one line of input.
///
/// # Errors
///
/// Returns a parse error for text that is not a JSON object and an invalid
/// request error for objects that are not well-formed JSON-RPC 2.0.
pub fn parse_message(line: &str) -> Result<IncomingMessage, JsonRpcError> {
    let value: Value = serde_json::from_str(line).map_err(|_| JsonRpcError::parse_error())?;
    if !value.is_object() {
        return Err(JsonRpcError::parse_error());
    }

    let envelope: Envelope =
        serde_json::from_value(value).map_err(|_| JsonRpcError::invalid_request(None))?;

    let Some(jsonrpc) = envelope.jsonrpc.filter(|v| v == JSONRPC_VERSION) else {
        return Err(JsonRpcError::invalid_request(None));
    };

    match envelope.id {
        None => {
            let method = envelope
                .method
                .ok_or_else(|| JsonRpcError::invalid_request(None))?;
            Ok(IncomingMessage::Notification(JsonRpcNotification {
                jsonrpc,
                method,
                params: envelope.params,
            }))
        }
        Some(None) => Err(JsonRpcError::invalid_request(None)),
        Some(Some(id)) => match envelope.method {
            Some(method) if !method.is_empty() => Ok(IncomingMessage::Request(JsonRpcRequest {
                jsonrpc,
                id,
                method,
                params: envelope.params,
            })),
            _ => Err(JsonRpcError::invalid_request(Some(id))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_code(line: &str) -> i32 {
        parse_message(line).unwrap_err().error.code
    }

    #[test]
    fn request_and_notification_are_told_apart_by_id() {
        let msg = parse_message(r#"{"jsonrpc":"2.0","id":"a-1","method":"tools/list"}"#).unwrap();
        let IncomingMessage::Request(req) = msg else {
            panic!("expected request");
        };
        assert_eq!(req.id, RequestId::String("a-1".to_string()));
        assert!(req.params.is_none());

        let msg = parse_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .unwrap();
        assert!(matches!(msg, IncomingMessage::Notification(n) if n.method == "notifications/initialized"));
    }

    #[test]
    fn malformed_lines() {
        assert_eq!(error_code("{not json"), ErrorCode::ParseError.code());
        assert_eq!(error_code("[1, 2]"), ErrorCode::ParseError.code());
        assert_eq!(
            error_code(r#"{"jsonrpc":"1.0","id":1,"method":"ping"}"#),
            ErrorCode::InvalidRequest.code()
        );
        assert_eq!(
            error_code(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#),
            ErrorCode::InvalidRequest.code()
        );
    }

    #[test]
    fn empty_method_keeps_request_id() {
        let err = parse_message(r#"{"jsonrpc":"2.0","id":9,"method":""}"#).unwrap_err();
        assert_eq!(err.id, Some(RequestId::Number(9)));
    }

    #[test]
    fn error_response_shape() {
        let value = serde_json::to_value(JsonRpcError::method_not_found(
            RequestId::Number(1),
            "resources/list",
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": -32601, "message": "Method not found: resources/list" }
            })
        );

        let value = serde_json::to_value(JsonRpcError::parse_error()).unwrap();
        assert!(value.get("id").is_none());
    }
}
