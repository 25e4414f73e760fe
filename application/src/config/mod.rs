//! Application-level configuration.
//!
//! - [`CopilotParams`]: per-tier time bounds for a copilot turn

pub mod copilot_params;

pub use copilot_params::{CopilotParams, DEFAULT_TOOL_NAME};
