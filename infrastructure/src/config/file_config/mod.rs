//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Credentials are never read here; see [`resolve_credential`](super::credentials::resolve_credential).

mod logging;
mod services;
mod tenant;
mod webhook;

pub use logging::FileLoggingConfig;
pub use services::{FileBackendConfig, FileLlmConfig, FileToolServiceConfig};
pub use tenant::FileTenantConfig;
pub use webhook::FileWebhookConfig;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{section}.timeout_secs cannot be 0")]
    InvalidTimeout { section: &'static str },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("webhook.bind is not a socket address: {0}")]
    InvalidBind(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Whose dashboard is shown
    pub tenant: FileTenantConfig,
    /// MCP tool-invocation service (first copilot tier)
    pub tool_service: FileToolServiceConfig,
    /// Hosted LLM (second copilot tier)
    pub llm: FileLlmConfig,
    /// api-backend (KPI summary and last copilot tier)
    pub backend: FileBackendConfig,
    /// Connexify webhook endpoint
    pub webhook: FileWebhookConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (section, secs) in [
            ("tool_service", self.tool_service.timeout_secs),
            ("llm", self.llm.timeout_secs),
            ("backend", self.backend.timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigValidationError::InvalidTimeout { section });
            }
        }

        for (field, value) in [
            ("tenant.tenant_id", &self.tenant.tenant_id),
            ("tool_service.url", &self.tool_service.url),
            ("llm.base_url", &self.llm.base_url),
            ("backend.base_url", &self.backend.base_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::EmptyField { field });
            }
        }

        self.webhook
            .bind
            .parse::<SocketAddr>()
            .map_err(|_| ConfigValidationError::InvalidBind(self.webhook.bind.clone()))?;

        Ok(())
    }
}
