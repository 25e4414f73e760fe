//! HTTP client for the api-backend service.
//!
//! Two endpoints: `GET /metrics/summary` feeds the KPI table and
//! `POST /ai/query` is the last copilot tier.

use crate::http::{build_client, ensure_success, provider_error};
use askads_application::ports::backend_client::BackendClient;
use askads_application::ports::provider_error::ProviderError;
use askads_domain::{KpiRow, TenantContext};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Answer text used when the backend replies without an `answer` field.
pub const NO_ANSWER: &str = "No answer received.";

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    question: &'a str,
    tenant_id: &'a str,
    client_name: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    answer: Option<String>,
}

pub struct HttpBackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    pub fn new(settings: BackendSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(settings.timeout)?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn ask(&self, question: &str, tenant: &TenantContext) -> Result<String, ProviderError> {
        debug!("POST {}", self.url("/ai/query"));
        let response = self
            .client
            .post(self.url("/ai/query"))
            .json(&QueryRequest {
                question,
                tenant_id: &tenant.tenant_id,
                client_name: &tenant.client_name,
            })
            .send()
            .await
            .map_err(provider_error)?;
        let response = ensure_success(response).await?;
        let body: QueryResponse = response.json().await.map_err(provider_error)?;
        Ok(body.answer.unwrap_or_else(|| NO_ANSWER.to_string()))
    }

    async fn metrics_summary(&self, tenant: &TenantContext) -> Result<Vec<KpiRow>, ProviderError> {
        debug!("GET {} for {}", self.url("/metrics/summary"), tenant.tenant_id);
        let response = self
            .client
            .get(self.url("/metrics/summary"))
            .query(&[
                ("tenant_id", tenant.tenant_id.as_str()),
                ("client_name", tenant.client_name.as_str()),
                ("date_range", tenant.date_range.as_str()),
            ])
            .send()
            .await
            .map_err(provider_error)?;
        let response = ensure_success(response).await?;
        response.json().await.map_err(provider_error)
    }
}
