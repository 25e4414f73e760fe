//! The three copilot tiers as values.
//!
//! Each tier wraps one port and turns a question into either an answer or a
//! [`ProviderError`]. The pipeline decides what an error means (skip or
//! fall back) from its kind.

use crate::config::CopilotParams;
use crate::ports::backend_client::BackendClient;
use crate::ports::llm_client::LlmClient;
use crate::ports::provider_error::ProviderError;
use crate::ports::tool_service::{ToolService, ToolServiceFactory};
use askads_domain::{KpiRow, Question, TenantContext, Tier};
use async_trait::async_trait;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Extra time the pipeline grants the tool tier beyond its query bound so
/// the client can be closed after a timeout.
const CLOSE_GRACE: Duration = Duration::from_secs(5);

/// Inputs available to every tier during a turn.
pub struct TurnContext<'a> {
    pub question: &'a Question,
    /// KPI rows as they were when the turn started.
    pub kpi_rows: &'a [KpiRow],
    pub tenant: &'a TenantContext,
}

/// One capability attempt in the fallback chain.
#[async_trait]
pub trait CopilotTier: Send + Sync {
    fn tier(&self) -> Tier;

    /// `false` skips the tier without running it.
    fn is_configured(&self) -> bool;

    /// Upper bound for [`attempt`](Self::attempt).
    fn timeout(&self) -> Duration;

    async fn attempt(&self, ctx: &TurnContext<'_>) -> Result<String, ProviderError>;
}

/// Tool-service tier: health check, then a single tool call.
///
/// A fresh client is built per attempt and closed on every exit path,
/// including a query that times out or panics.
pub struct ToolServiceTier {
    factory: Option<Arc<dyn ToolServiceFactory>>,
    tool_name: String,
    timeout: Duration,
}

impl ToolServiceTier {
    pub fn new(
        factory: Option<Arc<dyn ToolServiceFactory>>,
        tool_name: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            factory,
            tool_name: tool_name.into(),
            timeout,
        }
    }

    async fn query(&self, client: &dyn ToolService) -> Result<String, ProviderError> {
        if !client.health_check().await {
            return Err(ProviderError::Connection(
                "tool service health check failed".to_string(),
            ));
        }
        info!("Tool service session established, calling '{}'", self.tool_name);

        let result = client
            .call_tool(&self.tool_name, serde_json::json!({}))
            .await?;

        Ok(format!(
            "MCP tool '{}' executed. Result: {}",
            self.tool_name, result
        ))
    }
}

#[async_trait]
impl CopilotTier for ToolServiceTier {
    fn tier(&self) -> Tier {
        Tier::ToolService
    }

    fn is_configured(&self) -> bool {
        self.factory.as_ref().is_some_and(|f| f.is_configured())
    }

    fn timeout(&self) -> Duration {
        self.timeout + CLOSE_GRACE
    }

    async fn attempt(&self, _ctx: &TurnContext<'_>) -> Result<String, ProviderError> {
        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| ProviderError::NotConfigured("tool service".to_string()))?;

        let client = factory.create()?;
        let query = tokio::time::timeout(self.timeout, self.query(client.as_ref()));
        let outcome = AssertUnwindSafe(query).catch_unwind().await;
        client.close().await;
        debug!("Tool service client closed");

        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(_elapsed)) => {
                warn!("Tool service query exceeded {:?}", self.timeout);
                Err(ProviderError::Timeout)
            }
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

/// Hosted chat-completion tier.
pub struct HostedLlmTier {
    client: Arc<dyn LlmClient>,
    timeout: Duration,
}

impl HostedLlmTier {
    pub fn new(client: Arc<dyn LlmClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl CopilotTier for HostedLlmTier {
    fn tier(&self) -> Tier {
        Tier::HostedLlm
    }

    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn attempt(&self, ctx: &TurnContext<'_>) -> Result<String, ProviderError> {
        self.client.ask(ctx.question.content(), ctx.kpi_rows).await
    }
}

/// Internal backend tier. Always configured; the last resort.
pub struct BackendTier {
    client: Arc<dyn BackendClient>,
    timeout: Duration,
}

impl BackendTier {
    pub fn new(client: Arc<dyn BackendClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl CopilotTier for BackendTier {
    fn tier(&self) -> Tier {
        Tier::Backend
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn attempt(&self, ctx: &TurnContext<'_>) -> Result<String, ProviderError> {
        self.client.ask(ctx.question.content(), ctx.tenant).await
    }
}

/// Build the standard chain: tool service, hosted LLM, backend.
pub fn default_tiers(
    tool_service: Option<Arc<dyn ToolServiceFactory>>,
    llm: Arc<dyn LlmClient>,
    backend: Arc<dyn BackendClient>,
    params: &CopilotParams,
) -> Vec<Arc<dyn CopilotTier>> {
    vec![
        Arc::new(ToolServiceTier::new(
            tool_service,
            params.tool_name.clone(),
            params.tool_timeout,
        )),
        Arc::new(HostedLlmTier::new(llm, params.llm_timeout)),
        Arc::new(BackendTier::new(backend, params.backend_timeout)),
    ]
}
