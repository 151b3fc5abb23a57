use console::style;

use crate::dashboard::view::{ActionItem, AlertItem, DashboardView};
use crate::models::Severity;

const CARD_WIDTH: usize = 20;

/// Render the dashboard for a terminal.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", style(&view.title).white().bold()));

    if !view.populated {
        out.push_str(&format!("  {}\n", style("No data loaded").dim()));
        return out;
    }

    if !view.timestamp.is_empty() {
        out.push_str(&format!("{}\n", style(format!("Report time: {}", view.timestamp)).dim()));
    }

    out.push_str(&render_cards(view));

    out.push_str(&section_heading("Active Alerts"));
    if view.alerts.is_empty() {
        out.push_str(&format!("  {}\n", style("No active alerts").dim()));
    }
    for alert in &view.alerts {
        out.push_str(&render_alert(alert));
    }

    out.push_str(&section_heading("Optimization Recommendations"));
    if view.recommendations.is_empty() {
        out.push_str(&format!("  {}\n", style("No recommendations").dim()));
    }
    for rec in &view.recommendations {
        out.push_str(&format!(
            "  {} {}\n      {}\n      {}\n",
            style("⚙").blue(),
            style(&rec.service).bold(),
            rec.message,
            style(format!("Potential savings: {}", rec.savings_display)).green(),
        ));
    }

    if let Some(automation) = &view.automation {
        out.push_str(&section_heading("Recent Actions"));
        if automation.recent_actions.is_empty() {
            out.push_str(&format!("  {}\n", style("No recent actions").dim()));
        }
        for action in &automation.recent_actions {
            out.push_str(&render_action(action));
        }
    }

    out
}

fn render_cards(view: &DashboardView) -> String {
    let success = view
        .automation
        .as_ref()
        .map(|a| a.success_rate.clone())
        .unwrap_or_else(|| "-".to_string());

    let labels = ["Total Cost", "Potential Savings", "Anomalies", "Actions Success"];
    let header: String = labels
        .iter()
        .map(|l| format!("{:<width$}", l, width = CARD_WIDTH))
        .collect();

    format!(
        "\n  {}\n  {}{}{}{}\n",
        style(header.trim_end()).dim(),
        style(format!("{:<width$}", view.total_cost_display, width = CARD_WIDTH)).white().bold(),
        style(format!("{:<width$}", view.potential_savings_display, width = CARD_WIDTH)).green().bold(),
        style(format!("{:<width$}", view.anomalies, width = CARD_WIDTH)).yellow().bold(),
        style(success).magenta().bold(),
    )
}

fn section_heading(title: &str) -> String {
    format!(
        "\n{} {} {}\n",
        style("---").cyan().bold(),
        style(title).cyan().bold(),
        style("---").cyan().bold(),
    )
}

fn render_alert(alert: &AlertItem) -> String {
    format!(
        "  {} {} {}\n",
        render_severity_badge(&alert.severity),
        style(&alert.service).bold(),
        alert.message,
    )
}

fn render_action(action: &ActionItem) -> String {
    let status = match action.label {
        Some(label) => style(label.to_string()).green().to_string(),
        None => style(action.status.to_string()).dim().to_string(),
    };
    format!(
        "  {} {} {} {}\n",
        style("●").magenta(),
        style(&action.service).bold(),
        action.action,
        status,
    )
}

pub fn render_severity_badge(severity: &Severity) -> String {
    match severity {
        Severity::High => style(" HIGH ").red().bold().to_string(),
        Severity::Medium => style(" MEDIUM ").yellow().bold().to_string(),
        Severity::Low => style(" LOW ").blue().to_string(),
        Severity::Other(s) => style(format!(" {} ", s.to_uppercase())).dim().to_string(),
    }
}
