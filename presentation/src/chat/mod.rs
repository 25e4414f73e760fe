//! Interactive chat module
//!
//! Provides a line-based interactive copilot session.

mod repl;

pub use repl::ChatRepl;
