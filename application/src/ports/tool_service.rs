//! Tool service port
//!
//! Defines how the copilot talks to the remote tool-invocation service.

use crate::ports::provider_error::ProviderError;
use async_trait::async_trait;

/// A live connection to the tool-invocation service.
///
/// Holds session state; callers own it for the duration of one turn and
/// call [`close`](Self::close) when done.
#[async_trait]
pub trait ToolService: Send + Sync {
    /// Establish (or reuse) a session. `false` means the service is unusable.
    async fn health_check(&self) -> bool;

    /// Invoke a named tool and return its result payload.
    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ProviderError>;

    /// Release the underlying transport. No further calls are valid.
    async fn close(&self);
}

/// Builds a fresh [`ToolService`] per turn.
pub trait ToolServiceFactory: Send + Sync {
    /// Whether a tool-service credential is configured.
    fn is_configured(&self) -> bool;

    fn create(&self) -> Result<Box<dyn ToolService>, ProviderError>;
}
