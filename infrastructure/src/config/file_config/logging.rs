//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one event per copilot step.
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily rolling log files. Logs go to stderr when unset.
    pub log_dir: Option<PathBuf>,
}
