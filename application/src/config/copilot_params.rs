//! Copilot parameters: per-tier time bounds and the tool to call.
//!
//! [`CopilotParams`] groups the static parameters that control a turn in
//! [`CopilotPipeline`](crate::use_cases::copilot_pipeline::CopilotPipeline).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tool invoked on the tool service when it is healthy.
pub const DEFAULT_TOOL_NAME: &str = "list_objects";

/// Copilot turn control parameters.
///
/// Every tier runs under a finite bound so a hung remote service cannot
/// block a turn indefinitely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotParams {
    /// Bound for the whole tool-service attempt (handshake + tool call).
    pub tool_timeout: Duration,
    /// Bound for the hosted LLM request.
    pub llm_timeout: Duration,
    /// Bound for the backend query.
    pub backend_timeout: Duration,
    /// Tool called on the tool service.
    pub tool_name: String,
}

impl Default for CopilotParams {
    fn default() -> Self {
        Self {
            tool_timeout: Duration::from_secs(30),
            llm_timeout: Duration::from_secs(30),
            backend_timeout: Duration::from_secs(60),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
        }
    }
}

impl CopilotParams {
    // ==================== Builder Methods ====================

    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }

    pub fn with_llm_timeout(mut self, timeout: Duration) -> Self {
        self.llm_timeout = timeout;
        self
    }

    pub fn with_backend_timeout(mut self, timeout: Duration) -> Self {
        self.backend_timeout = timeout;
        self
    }

    pub fn with_tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = CopilotParams::default();
        assert_eq!(params.backend_timeout, Duration::from_secs(60));
        assert_eq!(params.tool_name, "list_objects");
    }

    #[test]
    fn test_builder() {
        let params = CopilotParams::default()
            .with_llm_timeout(Duration::from_secs(5))
            .with_tool_name("get_report");
        assert_eq!(params.llm_timeout, Duration::from_secs(5));
        assert_eq!(params.tool_name, "get_report");
    }
}
