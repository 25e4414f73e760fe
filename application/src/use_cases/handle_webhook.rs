//! Handle Webhook use case.
//!
//! Verifies the partner signature over the raw body, parses the event and
//! dispatches on its type. Unknown event types are logged and accepted.

use crate::ports::webhook_verifier::{WebhookError, WebhookVerifier};
use crate::use_cases::load_summary::LoadSummaryUseCase;
use askads_domain::{WebhookEvent, WebhookEventKind};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Body returned to the partner on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
    pub event_received: String,
}

/// Use case for inbound partner webhooks.
#[derive(Clone)]
pub struct HandleWebhookUseCase {
    verifier: Arc<dyn WebhookVerifier>,
    sync: Option<LoadSummaryUseCase>,
}

impl HandleWebhookUseCase {
    pub fn new(verifier: Arc<dyn WebhookVerifier>) -> Self {
        Self {
            verifier,
            sync: None,
        }
    }

    /// Refresh the KPI summary in the background when an account connects.
    pub fn with_sync(mut self, sync: LoadSummaryUseCase) -> Self {
        self.sync = Some(sync);
        self
    }

    pub fn handle(&self, body: &[u8], signature: Option<&str>) -> Result<WebhookAck, WebhookError> {
        self.verifier.verify(body, signature)?;

        let event =
            WebhookEvent::from_slice(body).map_err(|e| WebhookError::InvalidPayload(e.to_string()))?;
        let client_id = event.client_id().unwrap_or("unknown");

        info!(
            "Received partner webhook. Event: {}, Client ID: {}",
            event.event, client_id
        );

        match event.kind() {
            WebhookEventKind::AccountConnected => {
                info!("Account connected for client: {}. Triggering sync.", client_id);
                if let Some(sync) = self.sync.clone() {
                    tokio::spawn(async move {
                        sync.execute().await;
                    });
                }
            }
            WebhookEventKind::OnboardingCompleted => {
                info!("Onboarding completed for client: {}.", client_id);
            }
            WebhookEventKind::Unhandled(kind) => {
                warn!("Received unhandled partner event type: {}", kind);
            }
        }

        Ok(WebhookAck {
            status: "ok",
            event_received: event.event,
        })
    }
}
