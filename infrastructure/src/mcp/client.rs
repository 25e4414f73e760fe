//! Tool-service adapter over an MCP session.

use crate::mcp::error::McpError;
use crate::mcp::protocol::{McpResource, ToolCallParams};
use crate::mcp::session::{ProtocolSession, SessionPolicy};
use crate::mcp::transport::{HttpRpcTransport, RpcTransport};
use askads_application::ports::provider_error::ProviderError;
use askads_application::ports::tool_service::{ToolService, ToolServiceFactory};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for the MCP tool service.
#[derive(Debug, Clone)]
pub struct McpSettings {
    pub url: String,
    pub bearer_token: Option<String>,
    pub timeout: Duration,
    pub session_policy: SessionPolicy,
}

impl McpSettings {
    pub fn new(url: impl Into<String>, bearer_token: Option<String>) -> Self {
        Self {
            url: url.into(),
            bearer_token: bearer_token.filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(30),
            session_policy: SessionPolicy::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_session_policy(mut self, policy: SessionPolicy) -> Self {
        self.session_policy = policy;
        self
    }
}

/// [`ToolService`] backed by one [`ProtocolSession`].
pub struct McpToolClient<T: RpcTransport> {
    session: ProtocolSession<T>,
}

impl<T: RpcTransport> McpToolClient<T> {
    pub fn new(session: ProtocolSession<T>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ProtocolSession<T> {
        &self.session
    }

    /// Resource listing is not offered by the service; always empty.
    pub async fn list_resources(&self) -> Vec<McpResource> {
        warn!("Resource listing is not supported by the MCP tool service");
        Vec::new()
    }
}

impl McpToolClient<HttpRpcTransport> {
    /// Build a client talking HTTP to `settings.url`.
    pub fn connect(settings: &McpSettings) -> Result<Self, McpError> {
        let transport = HttpRpcTransport::new(
            settings.url.clone(),
            settings.bearer_token.clone(),
            settings.timeout,
        )?;
        let session = ProtocolSession::new(transport).with_policy(settings.session_policy);
        Ok(Self::new(session))
    }
}

#[async_trait]
impl<T: RpcTransport> ToolService for McpToolClient<T> {
    async fn health_check(&self) -> bool {
        self.session.ensure_session().await
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ProviderError> {
        debug!("Calling MCP tool '{}'", name);
        let params = serde_json::to_value(ToolCallParams {
            name: name.to_string(),
            arguments,
        })
        .map_err(McpError::from)?;
        Ok(self.session.call("tools/call", params).await?)
    }

    async fn close(&self) {
        self.session.close().await;
    }
}

/// Creates one [`McpToolClient`] per copilot turn.
pub struct McpToolClientFactory {
    settings: McpSettings,
}

impl McpToolClientFactory {
    pub fn new(settings: McpSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &McpSettings {
        &self.settings
    }
}

impl ToolServiceFactory for McpToolClientFactory {
    fn is_configured(&self) -> bool {
        self.settings.bearer_token.is_some()
    }

    fn create(&self) -> Result<Box<dyn ToolService>, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured(
                "tool service bearer token".to_string(),
            ));
        }
        let client = McpToolClient::connect(&self.settings)?;
        Ok(Box::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::error::Result;
    use crate::mcp::protocol::JsonRpcRequest;
    use crate::mcp::transport::TransportReply;
    use std::sync::Mutex;

    struct EchoTransport {
        methods: Mutex<Vec<(String, serde_json::Value)>>,
    }

    #[async_trait]
    impl RpcTransport for EchoTransport {
        async fn post(
            &self,
            request: &JsonRpcRequest,
            _session_id: Option<&str>,
        ) -> Result<TransportReply> {
            self.methods
                .lock()
                .unwrap()
                .push((request.method.clone(), request.params.clone()));
            let body = format!(
                "data: {}\n",
                serde_json::json!({"jsonrpc": "2.0", "id": request.id, "result": {"rows": 3}})
            );
            Ok(TransportReply {
                session_id: Some("sess-echo".into()),
                body,
            })
        }
    }

    fn client() -> McpToolClient<EchoTransport> {
        McpToolClient::new(ProtocolSession::new(EchoTransport {
            methods: Mutex::new(Vec::new()),
        }))
    }

    #[tokio::test]
    async fn call_tool_sends_tools_call_with_name() {
        let client = client();

        assert!(client.health_check().await);
        let result = client
            .call_tool("list_objects", serde_json::json!({}))
            .await
            .unwrap();

        assert_eq!(result, serde_json::json!({"rows": 3}));
        let inner = client.session();
        assert_eq!(inner.request_counter().await, 1);
    }

    #[tokio::test]
    async fn close_makes_calls_fail_with_closed() {
        let client = client();
        client.close().await;

        let err = client
            .call_tool("list_objects", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Closed));
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn list_resources_is_empty() {
        assert!(client().list_resources().await.is_empty());
    }

    #[test]
    fn factory_requires_bearer_token() {
        let factory = McpToolClientFactory::new(McpSettings::new("https://mcp.example.test/mcp", None));
        assert!(!factory.is_configured());
        assert!(matches!(factory.create(), Err(e) if e.is_not_configured()));

        let blank = McpToolClientFactory::new(McpSettings::new(
            "https://mcp.example.test/mcp",
            Some(String::new()),
        ));
        assert!(!blank.is_configured());
    }

    #[test]
    fn factory_creates_client_when_configured() {
        let factory = McpToolClientFactory::new(
            McpSettings::new("https://mcp.example.test/mcp", Some("secret".into()))
                .with_timeout(Duration::from_secs(5)),
        );
        assert!(factory.is_configured());
        assert!(factory.create().is_ok());
    }
}
