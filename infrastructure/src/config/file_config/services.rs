//! Remote service configuration from TOML
//! (`[tool_service]`, `[llm]` and `[backend]` sections)

use serde::{Deserialize, Serialize};

/// MCP tool service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolServiceConfig {
    /// Endpoint receiving JSON-RPC POSTs.
    pub url: String,
    /// Environment variable holding the bearer token (default: "LEMONADO_BEARER_TOKEN").
    pub bearer_token_env: String,
    /// Direct bearer token (not recommended; use the env var instead).
    pub bearer_token: Option<String>,
    pub timeout_secs: u64,
    /// Drop the session after a failed call so the next one re-handshakes.
    pub invalidate_session_on_error: bool,
}

impl Default for FileToolServiceConfig {
    fn default() -> Self {
        Self {
            url: "https://mcp.lemonado.io/mcp".to_string(),
            bearer_token_env: "LEMONADO_BEARER_TOKEN".to_string(),
            bearer_token: None,
            timeout_secs: 30,
            invalidate_session_on_error: false,
        }
    }
}

/// Hosted LLM configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Environment variable name for the API key (default: "MISTRAL_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            api_key_env: "MISTRAL_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.mistral.ai".to_string(),
            timeout_secs: 30,
        }
    }
}

/// api-backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 60,
        }
    }
}
