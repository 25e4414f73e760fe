//! KPI row entity and its display formatting

use serde::{Deserialize, Serialize};

/// Aggregated performance of one ad platform over the selected date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRow {
    pub platform: String,
    pub total_spend: f64,
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub total_revenue: f64,
}

impl KpiRow {
    pub fn formatted(&self) -> FormattedKpiRow {
        FormattedKpiRow {
            platform: title_case(&self.platform.replace('_', " ")),
            total_spend: format_money(self.total_spend),
            total_clicks: self.total_clicks.to_string(),
            total_conversions: self.total_conversions.to_string(),
            total_revenue: format_money(self.total_revenue),
        }
    }
}

/// Display-ready KPI row (all cells rendered as text)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedKpiRow {
    pub platform: String,
    pub total_spend: String,
    pub total_clicks: String,
    pub total_conversions: String,
    pub total_revenue: String,
}

fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
