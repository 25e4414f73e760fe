//! Infrastructure layer for ask-your-ads
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the MCP tool-service session, the hosted LLM and
//! backend HTTP clients, webhook signature verification, configuration
//! file loading and the JSONL conversation logger.

pub mod backend;
pub mod config;
pub mod http;
pub mod llm;
pub mod logging;
pub mod mcp;
pub mod webhook;

// Re-export commonly used types
pub use backend::{BackendSettings, HttpBackendClient};
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, resolve_credential};
pub use llm::{MistralClient, MistralSettings};
pub use logging::JsonlConversationLogger;
pub use mcp::{
    client::{McpSettings, McpToolClient, McpToolClientFactory},
    error::{McpError, Result},
    session::{ProtocolSession, SessionPolicy},
    transport::{HttpRpcTransport, RpcTransport},
};
pub use webhook::{HmacWebhookVerifier, SIGNATURE_HEADER};
