//! Error types for the MCP adapter

use askads_application::ProviderError;
use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, McpError>;

/// Errors that can occur when talking to the MCP tool service
#[derive(Error, Debug)]
pub enum McpError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid JSON in event stream: {error}\nRaw data: {raw}")]
    ParseError { error: String, raw: String },

    #[error("No 'data:' field found in event stream response")]
    NoData,

    #[error("MCP session ID not found in response headers")]
    MissingSessionId,

    #[error("Initialize response carried no result")]
    MissingResult,

    #[error("Failed to establish MCP session")]
    SessionNotInitialized,

    #[error("MCP Error: {0}")]
    RemoteError(serde_json::Value),

    #[error("Transport closed")]
    TransportClosed,
}

impl From<McpError> for ProviderError {
    fn from(e: McpError) -> Self {
        match e {
            McpError::Http(e) => crate::http::provider_error(e),
            McpError::Status { status, body } => ProviderError::HttpStatus {
                status,
                message: body,
            },
            McpError::Transport(msg) => ProviderError::Transport(msg),
            McpError::SessionNotInitialized => ProviderError::Connection(e.to_string()),
            McpError::RemoteError(payload) => ProviderError::Remote(payload),
            McpError::TransportClosed => ProviderError::Closed,
            McpError::SerializationError(_)
            | McpError::ParseError { .. }
            | McpError::NoData
            | McpError::MissingSessionId
            | McpError::MissingResult => ProviderError::Protocol(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askads_application::ErrorKind;

    #[test]
    fn test_session_failure_is_connection_kind() {
        let err: ProviderError = McpError::SessionNotInitialized.into();
        assert!(matches!(err, ProviderError::Connection(_)));
    }

    #[test]
    fn test_remote_error_keeps_payload() {
        let payload = serde_json::json!({"code": -32601, "message": "Method not found"});
        let err: ProviderError = McpError::RemoteError(payload.clone()).into();
        match err {
            ProviderError::Remote(p) => assert_eq!(p, payload),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_failures_are_protocol_kind() {
        let err: ProviderError = McpError::NoData.into();
        assert_eq!(err.kind(), ErrorKind::Protocol);
        let err: ProviderError = McpError::MissingSessionId.into();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }
}
