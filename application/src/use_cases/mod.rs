//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod copilot_pipeline;
pub mod handle_webhook;
pub mod load_summary;
