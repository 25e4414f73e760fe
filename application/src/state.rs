//! Shared, UI-visible dashboard state.
//!
//! One [`DashboardState`] sits behind an async mutex ([`SharedState`]).
//! Use cases lock it only around individual mutations and never hold the
//! guard across a network call, so readers can watch loading flags while a
//! request is in flight.

use askads_domain::{ChatMessage, KpiRow, Transcript, TurnState};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle to the dashboard state shared between use cases and the UI.
pub type SharedState = Arc<Mutex<DashboardState>>;

/// Loading flag and error text for the KPI summary table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryState {
    pub is_loading: bool,
    pub error: String,
}

/// Everything the dashboard and copilot pages render.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
    pub kpi_rows: Vec<KpiRow>,
    pub summary: SummaryState,
    pub transcript: Transcript,
    pub chat: TurnState,
}

impl DashboardState {
    pub fn shared() -> SharedState {
        Arc::new(Mutex::new(Self::default()))
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.transcript.push(message);
    }
}
