//! Provider error taxonomy shared by every copilot tier.
//!
//! Adapters convert their own errors into [`ProviderError`] at the port
//! boundary. The pipeline only looks at [`ProviderError::kind`] to decide
//! between skipping a tier and falling back.

use thiserror::Error;

/// Coarse error classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credential or secret absent. Never retried.
    Configuration,
    /// Network or HTTP failure.
    Transport,
    /// Malformed payload, missing session, or a remote-reported error.
    Protocol,
}

/// Errors returned by tool-service, LLM and backend ports
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Remote error: {0}")]
    Remote(serde_json::Value),

    #[error("Client closed")]
    Closed,
}

impl ProviderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProviderError::NotConfigured(_) => ErrorKind::Configuration,
            ProviderError::Connection(_)
            | ProviderError::HttpStatus { .. }
            | ProviderError::Transport(_)
            | ProviderError::Timeout
            | ProviderError::Closed => ErrorKind::Transport,
            ProviderError::Protocol(_) | ProviderError::Remote(_) => ErrorKind::Protocol,
        }
    }

    pub fn is_not_configured(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}
