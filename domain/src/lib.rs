//! Domain layer for ask-your-ads
//!
//! This crate contains the core entities and value objects of the marketing
//! dashboard. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Copilot
//!
//! A **turn** takes one user question and produces exactly one assistant
//! reply by walking an ordered chain of **tiers** (tool service, hosted LLM,
//! internal backend). The first tier that answers wins; a tier without
//! credentials is skipped, a tier that fails hands over to the next one.
//!
//! ## Dashboard
//!
//! KPI rows per ad platform, fetched for a [`TenantContext`].

pub mod chat;
pub mod copilot;
pub mod core;
pub mod metrics;
pub mod tenant;
pub mod webhook;

// Re-export commonly used types
pub use chat::{
    entities::{ChatMessage, Role},
    transcript::Transcript,
};
pub use copilot::{
    tier::{Tier, TierOutcome},
    turn::{APOLOGY_MESSAGE, TierAttempt, TurnReport, TurnState, UNAVAILABLE_MESSAGE},
};
pub use core::{error::DomainError, question::Question};
pub use metrics::kpi::{FormattedKpiRow, KpiRow};
pub use tenant::TenantContext;
pub use webhook::event::{WebhookEvent, WebhookEventKind};
