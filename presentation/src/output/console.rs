//! Console output formatter for the dashboard and copilot

use askads_domain::{ChatMessage, KpiRow, Role, TierOutcome, Transcript, TurnReport};
use colored::Colorize;

const COLUMNS: [&str; 5] = ["Platform", "Spend", "Clicks", "Conversions", "Revenue"];

/// Formats dashboard state for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// KPI summary as an aligned table
    pub fn format_kpi_table(rows: &[KpiRow]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("KPI Summary"));
        output.push('\n');

        if rows.is_empty() {
            output.push_str(&format!("{}\n", "No KPI data available.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        let cells: Vec<[String; 5]> = rows
            .iter()
            .map(|row| {
                let f = row.formatted();
                [
                    f.platform,
                    f.total_spend,
                    f.total_clicks,
                    f.total_conversions,
                    f.total_revenue,
                ]
            })
            .collect();

        let mut widths = COLUMNS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let heading = COLUMNS
            .iter()
            .zip(widths)
            .map(|(title, w)| format!("{:<w$}", title, w = w))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(&format!("{}\n", heading.cyan().bold()));

        for row in &cells {
            let line = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    if i == 0 {
                        format!("{:<w$}", cell, w = w)
                    } else {
                        format!("{:>w$}", cell, w = w)
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    /// KPI rows as pretty JSON
    pub fn format_kpi_json(rows: &[KpiRow]) -> String {
        serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
    }

    /// One transcript message
    pub fn format_message(message: &ChatMessage) -> String {
        match message.role() {
            Role::User => format!("{} {}", "You:".bold(), message.content()),
            Role::Assistant => format!(
                "{}\n{}",
                "Copilot:".green().bold(),
                Self::indent(message.content(), "  ")
            ),
        }
    }

    /// Whole transcript, oldest first
    pub fn format_transcript(transcript: &Transcript) -> String {
        if transcript.is_empty() {
            return format!("{}\n", "No messages yet.".dimmed());
        }
        transcript
            .messages()
            .iter()
            .map(Self::format_message)
            .collect::<Vec<_>>()
            .join("\n\n")
            + "\n"
    }

    /// Which tiers ran and how they ended
    pub fn format_report(report: &TurnReport) -> String {
        report
            .attempts
            .iter()
            .map(|attempt| {
                let mark = match &attempt.outcome {
                    TierOutcome::Answered(_) => "v".green(),
                    TierOutcome::Skipped => "-".dimmed(),
                    TierOutcome::Failed(_) => "x".red(),
                };
                format!("{} {} ({})", mark, attempt.tier.as_str(), attempt.outcome.label())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
