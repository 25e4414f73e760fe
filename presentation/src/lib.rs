//! Presentation layer for ask-your-ads
//!
//! This crate contains CLI definitions, console formatters, progress
//! reporters, the interactive copilot session and the webhook HTTP routes.

pub mod chat;
pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, Command};
pub use http::{WEBHOOK_PATH, webhook_routes};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress, progress_for};
