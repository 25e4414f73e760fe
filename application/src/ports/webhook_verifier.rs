//! Webhook signature verification port

use thiserror::Error;

/// Rejections at the webhook boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Webhook secret not configured.")]
    NotConfigured,

    #[error("Invalid signature.")]
    InvalidSignature,

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl WebhookError {
    /// HTTP status the endpoint answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            WebhookError::NotConfigured => 500,
            WebhookError::InvalidSignature => 403,
            WebhookError::InvalidPayload(_) => 422,
        }
    }
}

/// Checks that a raw request body was signed with the shared secret.
pub trait WebhookVerifier: Send + Sync {
    fn verify(&self, body: &[u8], signature: Option<&str>) -> Result<(), WebhookError>;
}
