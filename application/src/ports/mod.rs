//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod backend_client;
pub mod conversation_logger;
pub mod llm_client;
pub mod progress;
pub mod provider_error;
pub mod tool_service;
pub mod webhook_verifier;
