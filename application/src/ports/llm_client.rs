//! Hosted LLM port

use crate::ports::provider_error::ProviderError;
use askads_domain::KpiRow;
use async_trait::async_trait;

/// Stateless chat-completion client.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Whether an API credential is available.
    fn is_configured(&self) -> bool;

    /// Answer `question` using the KPI rows as grounding context.
    ///
    /// Returns [`ProviderError::NotConfigured`] when no credential is set.
    async fn ask(&self, question: &str, context_rows: &[KpiRow]) -> Result<String, ProviderError>;
}
