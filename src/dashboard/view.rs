use crate::dashboard::format;
use crate::models::{ActionStatus, DashboardReport, Savings, Severity};

pub const DEFAULT_TITLE: &str = "Cloud Cost Optimization";
pub const COMPLETED_LABEL: &str = "✓ Completed";

/// Presentation options applied while populating a view.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub title: String,
    pub currency_symbol: String,
    /// Truncate the recommendation list; `None` shows everything.
    pub max_recommendations: Option<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            currency_symbol: "$".to_string(),
            max_recommendations: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertItem {
    pub service: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationItem {
    pub service: String,
    pub message: String,
    /// Amounts with two decimals, preformatted text verbatim.
    pub savings: String,
    /// Amounts as currency, preformatted text verbatim.
    pub savings_display: String,
}

impl RecommendationItem {
    pub fn line(&self) -> String {
        format!("{}: {} (Potential savings: {})", self.service, self.message, self.savings)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionItem {
    pub service: String,
    pub action: String,
    pub status: ActionStatus,
    /// Set only for actions that completed successfully.
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutomationSummary {
    pub actions_executed: String,
    pub success_rate: String,
    pub recent_actions: Vec<ActionItem>,
}

/// Formatted dashboard fields, ready for any renderer.
///
/// An unpopulated view has every data field empty; renderers show the
/// page skeleton for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub title: String,
    pub populated: bool,
    pub timestamp: String,
    /// `toFixed(2)` style, e.g. `6393.59`.
    pub total_cost: String,
    /// Currency style, e.g. `$6,393.59`.
    pub total_cost_display: String,
    pub anomalies: String,
    pub alerts: Vec<AlertItem>,
    /// `"{service}: {message}"` for every high-severity alert.
    pub high_alerts: Vec<String>,
    pub potential_savings: String,
    pub potential_savings_display: String,
    /// Prefix for the bare `total_cost` and `potential_savings` figures.
    pub currency_symbol: String,
    pub recommendations: Vec<RecommendationItem>,
    pub automation: Option<AutomationSummary>,
}

impl DashboardView {
    pub fn unpopulated(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn populate(report: &DashboardReport, settings: &DisplaySettings) -> Self {
        let symbol = settings.currency_symbol.as_str();
        let monitoring = &report.monitoring;

        let alerts = monitoring
            .alerts
            .iter()
            .map(|a| AlertItem {
                service: a.service.clone(),
                severity: a.severity.clone(),
                message: a.message.clone(),
            })
            .collect();

        let high_alerts = report
            .high_alerts()
            .into_iter()
            .map(|a| format!("{}: {}", a.service, a.message))
            .collect();

        let limit = settings
            .max_recommendations
            .unwrap_or(report.optimization.top_recommendations.len());
        let recommendations = report
            .optimization
            .top_recommendations
            .iter()
            .take(limit)
            .map(|r| RecommendationItem {
                service: r.service.clone(),
                message: r.message.clone(),
                savings: format::savings(&r.potential_savings),
                savings_display: match &r.potential_savings {
                    Savings::Amount(v) => format::currency(*v, symbol),
                    Savings::Text(t) => t.clone(),
                },
            })
            .collect();

        let automation = report.automation.as_ref().map(|a| AutomationSummary {
            actions_executed: a.actions_executed.to_string(),
            success_rate: format::percent(a.success_rate),
            recent_actions: a
                .recent_actions
                .iter()
                .map(|act| ActionItem {
                    service: act.service.clone(),
                    action: act.action.clone(),
                    status: act.status.clone(),
                    label: (act.status == ActionStatus::Success).then_some(COMPLETED_LABEL),
                })
                .collect(),
        });

        let savings = report.potential_savings();

        Self {
            title: settings.title.clone(),
            populated: true,
            timestamp: report.timestamp.clone().unwrap_or_default(),
            total_cost: format::fixed2(monitoring.total_cost),
            total_cost_display: format::currency(monitoring.total_cost, symbol),
            anomalies: monitoring.anomalies.to_string(),
            alerts,
            high_alerts,
            potential_savings: format::fixed2(savings),
            potential_savings_display: format::currency(savings, symbol),
            currency_symbol: symbol.to_string(),
            recommendations,
            automation,
        }
    }
}
