//! Hosted LLM adapter (Mistral chat-completions)

pub mod mistral;
pub mod prompt;

pub use mistral::{MistralClient, MistralSettings};
