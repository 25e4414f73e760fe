//! Configuration file loading for ask-your-ads
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ASKADS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./askads.toml`
//! 4. Global: `~/.config/ask-your-ads/config.toml`
//! 5. Default values

mod credentials;
mod file_config;
mod loader;
mod settings;

pub use credentials::{resolve_credential, resolve_with};
pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileConfig, FileLlmConfig, FileLoggingConfig,
    FileTenantConfig, FileToolServiceConfig, FileWebhookConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILE};
