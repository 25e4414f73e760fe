//! Progress notification port for copilot turns

use askads_domain::{Tier, TurnReport};

/// Callback for progress updates during a copilot turn
pub trait CopilotProgressNotifier: Send + Sync {
    /// Called once the user message is in the transcript
    fn on_turn_start(&self, question: &str);

    /// Called when a tier is about to run
    fn on_tier_start(&self, _tier: Tier) {}

    /// Called when a tier has no credential configured
    fn on_tier_skipped(&self, _tier: Tier) {}

    /// Called when a tier ran and failed; the next tier follows
    fn on_tier_failed(&self, _tier: Tier, _cause: &str) {}

    /// Called after the assistant reply is appended and loading is cleared
    fn on_turn_complete(&self, report: &TurnReport);
}

/// No-op progress notifier
pub struct NoCopilotProgress;

impl CopilotProgressNotifier for NoCopilotProgress {
    fn on_turn_start(&self, _question: &str) {}
    fn on_turn_complete(&self, _report: &TurnReport) {}
}
