//! Webhook signature verification

pub mod hmac_verifier;

pub use hmac_verifier::{HmacWebhookVerifier, SIGNATURE_HEADER, sign};
