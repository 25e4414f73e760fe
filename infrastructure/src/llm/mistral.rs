//! Mistral chat-completions client

use crate::http::{build_client, ensure_success, provider_error};
use crate::llm::prompt::{PromptMessage, build_prompt};
use askads_application::ports::llm_client::LlmClient;
use askads_application::ports::provider_error::ProviderError;
use askads_domain::{KpiRow, TenantContext};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";
pub const MODEL: &str = "mistral-medium-latest";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

/// Resolved settings for [`MistralClient`].
#[derive(Debug, Clone)]
pub struct MistralSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for MistralSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'static str,
    messages: &'a [PromptMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`LlmClient`] backed by the Mistral API.
pub struct MistralClient {
    settings: MistralSettings,
    tenant: TenantContext,
}

impl MistralClient {
    pub fn new(settings: MistralSettings, tenant: TenantContext) -> Self {
        let api_key = settings.api_key.filter(|k| !k.is_empty());
        Self {
            settings: MistralSettings { api_key, ..settings },
            tenant,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmClient for MistralClient {
    fn is_configured(&self) -> bool {
        self.settings.api_key.is_some()
    }

    async fn ask(&self, question: &str, context_rows: &[KpiRow]) -> Result<String, ProviderError> {
        let Some(api_key) = &self.settings.api_key else {
            return Err(ProviderError::NotConfigured("MISTRAL_API_KEY".to_string()));
        };

        let messages = build_prompt(question, context_rows, &self.tenant);
        let request = ChatRequest {
            model: MODEL,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!("Querying {} with {} KPI rows", MODEL, context_rows.len());
        let client = build_client(self.settings.timeout)?;
        let response = client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(provider_error)?;
        let response = ensure_success(response).await?;
        let body: ChatResponse = response.json().await.map_err(provider_error)?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ProviderError::Protocol("chat completion returned no choices".into()))
    }
}
