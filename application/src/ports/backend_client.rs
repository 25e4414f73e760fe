//! Internal backend port

use crate::ports::provider_error::ProviderError;
use askads_domain::{KpiRow, TenantContext};
use async_trait::async_trait;

/// Stateless client for the application's own REST API.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// `POST /ai/query`: the terminal copilot tier.
    async fn ask(&self, question: &str, tenant: &TenantContext) -> Result<String, ProviderError>;

    /// `GET /metrics/summary`: KPI rows for the dashboard table.
    async fn metrics_summary(&self, tenant: &TenantContext) -> Result<Vec<KpiRow>, ProviderError>;
}
