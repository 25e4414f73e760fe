//! Per-turn state and the fixed user-facing texts.

use super::tier::{Tier, TierOutcome};
use serde::Serialize;

/// Shown in the error banner when every tier failed.
pub const UNAVAILABLE_MESSAGE: &str =
    "All AI services are currently unavailable. Please check your configuration and network.";

/// Appended as the assistant reply when every tier failed.
pub const APOLOGY_MESSAGE: &str = "I'm unable to process your request at the moment.";

/// Transient UI-visible flags for the copilot chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnState {
    pub is_loading: bool,
    pub last_error: String,
}

impl TurnState {
    /// Flags at the start of a turn.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.last_error.clear();
    }

    /// Flags at the end of a turn, whatever the outcome.
    pub fn finish(&mut self) {
        self.is_loading = false;
    }

    pub fn has_error(&self) -> bool {
        !self.last_error.is_empty()
    }
}

/// Record of one tier attempt within a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierAttempt {
    pub tier: Tier,
    pub outcome: TierOutcome,
}

/// What happened during a turn, in attempt order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub attempts: Vec<TierAttempt>,
}

impl TurnReport {
    pub fn record(&mut self, tier: Tier, outcome: TierOutcome) {
        self.attempts.push(TierAttempt { tier, outcome });
    }

    /// The tier that produced the reply, if any did.
    pub fn answered_by(&self) -> Option<Tier> {
        self.attempts
            .iter()
            .find(|a| a.outcome.is_answered())
            .map(|a| a.tier)
    }

    pub fn is_exhausted(&self) -> bool {
        self.answered_by().is_none()
    }

    pub fn attempted(&self) -> Vec<Tier> {
        self.attempts.iter().map(|a| a.tier).collect()
    }
}
