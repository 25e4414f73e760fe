//! Prompt construction for the analytics copilot.

use askads_domain::{KpiRow, TenantContext};
use serde::Serialize;

/// Instructions for the hosted model.
pub const SYSTEM_PROMPT: &str = "You are a world-class marketing analytics assistant for a digital agency.
Your client is asking for insights about their performance data.
Analyze the provided KPI data and answer user questions with actionable, data-driven insights.
Focus on: spend efficiency, Return On Ad Spend (ROAS), conversion trends, and clear optimization recommendations.
Be concise and clear in your analysis. Use the provided data to back up your claims.
";

/// One chat-completions message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: &'static str,
    pub content: String,
}

/// Build the `[system, user]` message pair for one question.
pub fn build_prompt(question: &str, rows: &[KpiRow], tenant: &TenantContext) -> Vec<PromptMessage> {
    // KpiRow serialization is infallible
    let kpi_json = serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string());
    let user = format!(
        "\nClient: {}\nDate Range: {}\n\nCurrent Metrics:\n{}\n\nQuestion: {}\n",
        tenant.client_name, tenant.date_range, kpi_json, question
    );
    vec![
        PromptMessage {
            role: "system",
            content: SYSTEM_PROMPT.to_string(),
        },
        PromptMessage {
            role: "user",
            content: user,
        },
    ]
}
