//! JSON-RPC protocol types for the MCP tool service.
//!
//! - **Requests**: client → service (`initialize`, `tools/call`)
//! - **Replies**: service → client, one JSON object per event stream,
//!   carrying either `result` or `error`

use crate::mcp::error::{McpError, Result};
use serde::{Deserialize, Serialize};

/// MCP protocol revision announced during the handshake.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Client name announced during the handshake.
pub const CLIENT_NAME: &str = "ask-your-ads";

/// JSON-RPC request
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    /// Creates a request with an explicit, session-scoped id.
    pub fn new(id: u64, method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: method.into(),
            params,
        }
    }
}

/// Identity sent in `initialize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub version: String,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            name: CLIENT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// `initialize` parameters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: &'static str,
    pub capabilities: serde_json::Value,
    pub client_info: ClientInfo,
}

impl InitializeParams {
    pub fn new(client_info: ClientInfo) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            capabilities: serde_json::json!({
                "roots": { "listChanged": true },
                "sampling": {}
            }),
            client_info,
        }
    }
}

/// `tools/call` parameters
#[derive(Debug, Clone, Serialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: serde_json::Value,
}

/// Resource descriptor as listed by MCP servers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub description: Option<String>,
}

/// Pull the `result` out of a decoded reply.
///
/// An `error` field becomes [`McpError::RemoteError`]. A keyed object without
/// `result` yields an empty object; any other JSON shape is returned as is.
pub fn extract_result(payload: serde_json::Value) -> Result<serde_json::Value> {
    match payload {
        serde_json::Value::Object(mut map) => {
            if let Some(error) = map.remove("error") {
                return Err(McpError::RemoteError(error));
            }
            Ok(map
                .remove("result")
                .unwrap_or_else(|| serde_json::json!({})))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_request_serializes_correctly() {
        let params = InitializeParams::new(ClientInfo {
            name: "ask-your-ads".to_string(),
            version: "1.0.0".to_string(),
        });
        let request = JsonRpcRequest::new(1, "initialize", serde_json::to_value(&params).unwrap());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], 1);
        assert_eq!(json["method"], "initialize");
        assert_eq!(json["params"]["protocolVersion"], "2024-11-05");
        assert_eq!(json["params"]["capabilities"]["roots"]["listChanged"], true);
        assert!(json["params"]["capabilities"]["sampling"].is_object());
        assert_eq!(json["params"]["clientInfo"]["name"], "ask-your-ads");
    }

    #[test]
    fn tool_call_params_serialize() {
        let params = ToolCallParams {
            name: "list_objects".to_string(),
            arguments: serde_json::json!({}),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["name"], "list_objects");
        assert!(json["arguments"].as_object().unwrap().is_empty());
    }

    #[test]
    fn extract_result_returns_result_field() {
        let payload = serde_json::json!({"jsonrpc": "2.0", "id": 2, "result": {"content": []}});
        assert_eq!(
            extract_result(payload).unwrap(),
            serde_json::json!({"content": []})
        );
    }

    #[test]
    fn extract_result_surfaces_remote_error() {
        let payload = serde_json::json!({"id": 2, "error": {"code": -32602, "message": "bad"}});
        match extract_result(payload).unwrap_err() {
            McpError::RemoteError(e) => assert_eq!(e["code"], -32602),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn extract_result_passes_through_non_objects() {
        let payload = serde_json::json!([{"name": "a"}]);
        assert_eq!(extract_result(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn extract_result_defaults_to_empty_object() {
        let payload = serde_json::json!({"id": 3});
        assert_eq!(extract_result(payload).unwrap(), serde_json::json!({}));
    }
}
