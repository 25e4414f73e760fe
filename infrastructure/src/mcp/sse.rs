//! Text-event-stream payload extraction.
//!
//! The tool service answers every POST with a short event stream. Only the
//! first `data:` line matters; the service never sends more than one per
//! response.

use crate::mcp::error::{McpError, Result};

/// Field marker for payload lines.
pub const DATA_PREFIX: &str = "data:";

/// Decode the JSON carried by the first `data:` line.
///
/// Malformed JSON on that line is a hard failure, as is the absence of any
/// `data:` line.
pub fn parse_event_stream(text: &str) -> Result<serde_json::Value> {
    let Some(payload) = text.lines().find_map(|line| line.strip_prefix(DATA_PREFIX)) else {
        return Err(McpError::NoData);
    };
    let payload = payload.trim();
    serde_json::from_str(payload).map_err(|e| McpError::ParseError {
        error: e.to_string(),
        raw: payload.to_string(),
    })
}
