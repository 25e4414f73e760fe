//! Application layer for ask-your-ads
//!
//! This crate contains use cases, port definitions, the shared dashboard
//! state, and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod state;
pub mod use_cases;

// Re-export commonly used types
pub use config::CopilotParams;
pub use ports::{
    backend_client::BackendClient,
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_client::LlmClient,
    progress::{CopilotProgressNotifier, NoCopilotProgress},
    provider_error::{ErrorKind, ProviderError},
    tool_service::{ToolService, ToolServiceFactory},
    webhook_verifier::{WebhookError, WebhookVerifier},
};
pub use state::{DashboardState, SharedState, SummaryState};
pub use use_cases::copilot_pipeline::{
    BackendTier, CopilotPipeline, CopilotTier, HostedLlmTier, ToolServiceTier, TurnContext,
    default_tiers,
};
pub use use_cases::handle_webhook::{HandleWebhookUseCase, WebhookAck};
pub use use_cases::load_summary::{LoadSummaryUseCase, summary_error_message};
