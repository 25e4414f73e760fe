//! Webhook endpoint configuration from TOML (`[webhook]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebhookConfig {
    /// Environment variable holding the shared secret (default: "CONNEXIFY_WEBHOOK_SECRET").
    pub secret_env: String,
    pub secret: Option<String>,
    /// Listen address for `serve`.
    pub bind: String,
}

impl Default for FileWebhookConfig {
    fn default() -> Self {
        Self {
            secret_env: "CONNEXIFY_WEBHOOK_SECRET".to_string(),
            secret: None,
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}
