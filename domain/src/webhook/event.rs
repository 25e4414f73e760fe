//! Webhook event entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Inbound partner webhook body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl WebhookEvent {
    /// Parse the raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(body).map_err(|e| DomainError::InvalidWebhookPayload(e.to_string()))
    }

    pub fn kind(&self) -> WebhookEventKind {
        WebhookEventKind::from_event(&self.event)
    }

    /// `data.client_id` when present as a string.
    pub fn client_id(&self) -> Option<&str> {
        self.data.get("client_id").and_then(|v| v.as_str())
    }
}

/// Event types the dashboard reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEventKind {
    AccountConnected,
    OnboardingCompleted,
    Unhandled(String),
}

impl WebhookEventKind {
    pub fn from_event(event: &str) -> Self {
        match event {
            "account.connected" => WebhookEventKind::AccountConnected,
            "onboarding.completed" => WebhookEventKind::OnboardingCompleted,
            other => WebhookEventKind::Unhandled(other.to_string()),
        }
    }
}
