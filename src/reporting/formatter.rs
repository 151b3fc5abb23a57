use chrono::NaiveDateTime;

use crate::dashboard::format::{currency, percent};
use crate::errors::CostDashError;
use crate::models::{DashboardReport, Savings};

const TOP_COST_CENTERS: usize = 3;

/// Plain-text executive summary of a report.
pub fn format_summary(report: &DashboardReport, generated_at: NaiveDateTime, symbol: &str) -> String {
    let mut out = String::new();
    out.push_str("Cloud Cost Optimization Summary\n");
    out.push_str(&"=".repeat(30));
    out.push_str("\n\n");
    out.push_str(&format!("Report Generated: {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
    if let Some(ts) = &report.timestamp {
        out.push_str(&format!("Data Timestamp: {}\n", ts));
    }
    out.push('\n');

    out.push_str("1. Overall Costs\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    out.push_str(&format!("Total Cost: {}\n", currency(report.monitoring.total_cost, symbol)));
    out.push_str(&format!("Potential Savings: {}\n", currency(report.potential_savings(), symbol)));
    out.push_str(&format!(
        "Number of Optimization Opportunities: {}\n\n",
        report.recommendations_count()
    ));

    out.push_str("2. Service-wise Recommendations\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    for rec in &report.optimization.top_recommendations {
        let savings = match &rec.potential_savings {
            Savings::Amount(v) => currency(*v, symbol),
            Savings::Text(t) => t.clone(),
        };
        out.push_str(&format!("\n• {}:\n", rec.service));
        out.push_str(&format!("  - {}\n", rec.message));
        out.push_str(&format!("  - Potential Savings: {}\n", savings));
    }

    out.push_str("\n3. Key Metrics\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    out.push_str(&format!("Anomalies Detected: {}\n", report.monitoring.anomalies));
    out.push_str(&format!("High Severity Alerts: {}\n", report.high_alerts().len()));
    if let Some(automation) = &report.automation {
        out.push_str(&format!(
            "Automated Actions: {} ({} success)\n",
            automation.actions_executed,
            percent(automation.success_rate)
        ));
    }

    let mut by_service: Vec<(&String, &f64)> = report.monitoring.by_service.iter().collect();
    if !by_service.is_empty() {
        by_service.sort_by(|a, b| b.1.total_cmp(a.1));
        out.push_str("\nTop Cost Centers:\n");
        for (service, cost) in by_service.into_iter().take(TOP_COST_CENTERS) {
            out.push_str(&format!("• {}: {}\n", service, currency(*cost, symbol)));
        }
    }

    out
}

/// Pretty JSON of the normalised report.
pub fn format_json(report: &DashboardReport) -> Result<String, CostDashError> {
    Ok(serde_json::to_string_pretty(report)?)
}
