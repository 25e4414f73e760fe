//! HTTP surface (partner webhooks)

pub mod webhook;

pub use webhook::{WEBHOOK_PATH, webhook_routes};
