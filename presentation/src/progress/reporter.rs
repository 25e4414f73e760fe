//! Progress reporting for copilot turns

use askads_application::ports::progress::{CopilotProgressNotifier, NoCopilotProgress};
use askads_domain::{Tier, TurnReport};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Spinner shown while the copilot works through its tiers
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn tier_display_name(tier: Tier) -> &'static str {
        match tier {
            Tier::ToolService => "tool service",
            Tier::HostedLlm => "hosted LLM",
            Tier::Backend => "backend",
        }
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CopilotProgressNotifier for ProgressReporter {
    fn on_turn_start(&self, _question: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Copilot");
        pb.set_message("is thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_tier_start(&self, tier: Tier) {
        self.with_spinner(|pb| {
            pb.set_message(format!("asking {}...", Self::tier_display_name(tier)));
        });
    }

    fn on_tier_failed(&self, tier: Tier, _cause: &str) {
        self.with_spinner(|pb| {
            pb.println(format!(
                "  {} {} failed, falling back",
                "x".red(),
                Self::tier_display_name(tier)
            ));
        });
    }

    fn on_turn_complete(&self, report: &TurnReport) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            match report.answered_by() {
                Some(tier) => pb.finish_with_message(format!(
                    "answered via {}",
                    Self::tier_display_name(tier).green()
                )),
                None => pb.finish_with_message("no service answered".red().to_string()),
            }
        }
    }
}

/// Pick a notifier for the current output: nothing when quiet, a spinner
/// on a terminal, plain lines otherwise.
pub fn progress_for(quiet: bool, interactive: bool) -> Arc<dyn CopilotProgressNotifier> {
    match (quiet, interactive) {
        (true, _) => Arc::new(NoCopilotProgress),
        (false, true) => Arc::new(ProgressReporter::new()),
        (false, false) => Arc::new(SimpleProgress),
    }
}

/// Simple text-based progress (no spinner), written to stderr
pub struct SimpleProgress;

impl CopilotProgressNotifier for SimpleProgress {
    fn on_turn_start(&self, _question: &str) {
        eprintln!("{} Copilot is thinking...", "->".cyan());
    }

    fn on_tier_skipped(&self, tier: Tier) {
        eprintln!(
            "  {} {} (not configured)",
            "-".dimmed(),
            ProgressReporter::tier_display_name(tier)
        );
    }

    fn on_tier_failed(&self, tier: Tier, cause: &str) {
        eprintln!(
            "  {} {}: {}",
            "x".red(),
            ProgressReporter::tier_display_name(tier),
            cause
        );
    }

    fn on_turn_complete(&self, report: &TurnReport) {
        if let Some(tier) = report.answered_by() {
            eprintln!("  {} {}", "v".green(), ProgressReporter::tier_display_name(tier));
        }
    }
}
