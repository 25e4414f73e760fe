//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    #[error("Invalid webhook payload: {0}")]
    InvalidWebhookPayload(String),
}
