//! Conversion from raw file config into adapter settings.
//!
//! Environment lookups for credentials happen here, once, at wiring time.

use super::credentials::resolve_credential;
use super::file_config::FileConfig;
use crate::backend::BackendSettings;
use crate::llm::MistralSettings;
use crate::mcp::client::McpSettings;
use crate::mcp::session::SessionPolicy;
use askads_application::CopilotParams;
use askads_domain::TenantContext;
use std::time::Duration;

impl FileConfig {
    pub fn tenant_context(&self) -> TenantContext {
        self.tenant.to_tenant_context()
    }

    pub fn mcp_settings(&self) -> McpSettings {
        let cfg = &self.tool_service;
        let token = resolve_credential(cfg.bearer_token.as_deref(), &cfg.bearer_token_env);
        let policy = if cfg.invalidate_session_on_error {
            SessionPolicy::InvalidateOnCallFailure
        } else {
            SessionPolicy::KeepOnCallFailure
        };
        McpSettings::new(&cfg.url, token)
            .with_timeout(Duration::from_secs(cfg.timeout_secs))
            .with_session_policy(policy)
    }

    pub fn mistral_settings(&self) -> MistralSettings {
        MistralSettings {
            api_key: resolve_credential(self.llm.api_key.as_deref(), &self.llm.api_key_env),
            base_url: self.llm.base_url.clone(),
            timeout: Duration::from_secs(self.llm.timeout_secs),
        }
    }

    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            base_url: self.backend.base_url.clone(),
            timeout: Duration::from_secs(self.backend.timeout_secs),
        }
    }

    pub fn webhook_secret(&self) -> Option<String> {
        resolve_credential(self.webhook.secret.as_deref(), &self.webhook.secret_env)
    }

    /// Per-tier bounds for the copilot pipeline, taken from the service timeouts.
    pub fn copilot_params(&self) -> CopilotParams {
        CopilotParams::default()
            .with_tool_timeout(Duration::from_secs(self.tool_service.timeout_secs))
            .with_llm_timeout(Duration::from_secs(self.llm.timeout_secs))
            .with_backend_timeout(Duration::from_secs(self.backend.timeout_secs))
    }
}
