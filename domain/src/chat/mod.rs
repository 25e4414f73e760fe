//! Copilot chat: messages and the append-only transcript.

pub mod entities;
pub mod transcript;
