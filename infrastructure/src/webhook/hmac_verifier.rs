//! HMAC-SHA256 verifier for Connexify webhooks.

use askads_application::ports::webhook_verifier::{WebhookError, WebhookVerifier};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex-encoded signature.
pub const SIGNATURE_HEADER: &str = "x-connexify-signature";

/// Hex-encoded HMAC-SHA256 of `body` under `secret`.
pub fn sign(secret: &str, body: &[u8]) -> String {
    // HMAC accepts keys of any length
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return String::new(),
    };
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

pub struct HmacWebhookVerifier {
    secret: Option<String>,
}

impl HmacWebhookVerifier {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }
}

impl WebhookVerifier for HmacWebhookVerifier {
    fn verify(&self, body: &[u8], signature: Option<&str>) -> Result<(), WebhookError> {
        let Some(secret) = &self.secret else {
            warn!("Webhook received but no secret is configured");
            return Err(WebhookError::NotConfigured);
        };
        let signature = signature.ok_or(WebhookError::InvalidSignature)?;
        let expected = hex::decode(signature.trim()).map_err(|_| WebhookError::InvalidSignature)?;

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| WebhookError::NotConfigured)?;
        mac.update(body);
        // constant-time comparison
        mac.verify_slice(&expected)
            .map_err(|_| WebhookError::InvalidSignature)
    }
}
