//! Copilot tiers and attempt outcomes

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One capability provider in the copilot fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Tool-invocation service reached through an MCP session
    ToolService,
    /// Hosted chat-completion model
    HostedLlm,
    /// The application's own REST query endpoint
    Backend,
}

impl Tier {
    /// Default priority order.
    pub const DEFAULT_ORDER: [Tier; 3] = [Tier::ToolService, Tier::HostedLlm, Tier::Backend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::ToolService => "tool_service",
            Tier::HostedLlm => "hosted_llm",
            Tier::Backend => "backend",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tool_service" | "tool" | "mcp" => Ok(Tier::ToolService),
            "hosted_llm" | "llm" => Ok(Tier::HostedLlm),
            "backend" | "api" => Ok(Tier::Backend),
            other => Err(DomainError::UnknownTier(other.to_string())),
        }
    }
}

/// Result of attempting a single tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierOutcome {
    /// The tier produced the assistant reply.
    Answered(String),
    /// The tier has no credential configured. Never retried, never logged as failure.
    Skipped,
    /// The tier ran and failed; the cause is kept for diagnostics.
    Failed(String),
}

impl TierOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, TierOutcome::Answered(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TierOutcome::Answered(_) => "answered",
            TierOutcome::Skipped => "skipped",
            TierOutcome::Failed(_) => "failed",
        }
    }
}
