use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Severity attached to a monitoring alert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    High,
    Medium,
    Low,
    /// Any severity the upstream monitor emits that we do not know about.
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Other(s) => s,
        }
    }

    /// Severity named in a filter. Known levels match in any case; unknown
    /// ones are kept exactly as given, matching how reports store them.
    pub fn from_filter(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Other(s.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Other(s),
        }
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an automated remediation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionStatus {
    Success,
    Simulated,
    Scheduled,
    Error,
    Other(String),
}

impl ActionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ActionStatus::Success => "success",
            ActionStatus::Simulated => "simulated",
            ActionStatus::Scheduled => "scheduled",
            ActionStatus::Error => "error",
            ActionStatus::Other(s) => s,
        }
    }
}

impl From<String> for ActionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => ActionStatus::Success,
            "simulated" => ActionStatus::Simulated,
            "scheduled" => ActionStatus::Scheduled,
            "error" => ActionStatus::Error,
            _ => ActionStatus::Other(s),
        }
    }
}

impl From<ActionStatus> for String {
    fn from(s: ActionStatus) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated savings of a recommendation. Upstream producers emit either a
/// plain number or a preformatted string such as `"$1,278.72"` or `"12.5%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Savings {
    Amount(f64),
    Text(String),
}

impl Savings {
    /// Monetary value, if one can be read. Percentages yield `None`.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Savings::Amount(v) if v.is_finite() => Some(*v),
            Savings::Amount(_) => None,
            Savings::Text(s) => {
                let s = s.trim();
                if s.ends_with('%') {
                    return None;
                }
                let (negative, rest) = match s.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, s),
                };
                let digits: String = rest
                    .trim_start_matches('$')
                    .chars()
                    .filter(|c| *c != ',')
                    .collect();
                let value: f64 = digits.parse().ok()?;
                Some(if negative { -value } else { value })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub service: String,
    pub severity: Severity,
    pub message: String,
    /// Upstream alert kind, e.g. `cost_threshold` or `anomaly`.
    #[serde(rename = "type", alias = "kind", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitoring {
    #[serde(alias = "totalCost")]
    pub total_cost: f64,
    #[serde(default)]
    pub anomalies: u64,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    /// Cost per service, when the producer includes the breakdown.
    #[serde(default, alias = "byService", skip_serializing_if = "BTreeMap::is_empty")]
    pub by_service: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub service: String,
    pub message: String,
    #[serde(alias = "savings", alias = "potentialSavings")]
    pub potential_savings: Savings,
    #[serde(rename = "type", alias = "kind", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Optimization {
    #[serde(default, alias = "potentialSavings", skip_serializing_if = "Option::is_none")]
    pub potential_savings: Option<f64>,
    #[serde(default, alias = "recommendationsCount", skip_serializing_if = "Option::is_none")]
    pub recommendations_count: Option<u64>,
    #[serde(default, alias = "topRecommendations")]
    pub top_recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationAction {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub action: String,
    pub status: ActionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Automation {
    #[serde(default, alias = "actionsExecuted")]
    pub actions_executed: u64,
    /// Fraction in `[0, 1]`.
    #[serde(default, alias = "successRate")]
    pub success_rate: f64,
    #[serde(default, alias = "recentActions")]
    pub recent_actions: Vec<AutomationAction>,
}

/// A pre-computed cost report as published by the monitoring pipeline.
///
/// Accepts the upper-case static export (`TIMESTAMP`, `MONITORING`,
/// `OPTIMIZATION`), the camelCase API payload with a top-level
/// `recommendations` list, and the snake_case orchestrator output.
/// Serialises to the snake_case form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawReport")]
pub struct DashboardReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub monitoring: Monitoring,
    pub optimization: Optimization,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation: Option<Automation>,
}

#[derive(Deserialize)]
struct RawReport {
    #[serde(default, alias = "TIMESTAMP")]
    timestamp: Option<String>,
    #[serde(alias = "MONITORING")]
    monitoring: Monitoring,
    #[serde(default, alias = "OPTIMIZATION")]
    optimization: Option<Optimization>,
    #[serde(default)]
    recommendations: Vec<Recommendation>,
    #[serde(default, alias = "AUTOMATION")]
    automation: Option<Automation>,
}

impl From<RawReport> for DashboardReport {
    fn from(raw: RawReport) -> Self {
        let mut optimization = raw.optimization.unwrap_or_default();
        if optimization.top_recommendations.is_empty() {
            optimization.top_recommendations = raw.recommendations;
        }
        Self {
            timestamp: raw.timestamp,
            monitoring: raw.monitoring,
            optimization,
            automation: raw.automation,
        }
    }
}

impl DashboardReport {
    /// Fixed demonstration data, used when no report source is available.
    pub fn sample() -> Self {
        Self {
            timestamp: None,
            monitoring: Monitoring {
                total_cost: 6393.59,
                anomalies: 5,
                alerts: vec![
                    Alert {
                        service: "Cloud SQL".to_string(),
                        severity: Severity::High,
                        message: "Cost spike detected".to_string(),
                        kind: None,
                    },
                    Alert {
                        service: "Compute Engine".to_string(),
                        severity: Severity::Medium,
                        message: "Unusual usage pattern".to_string(),
                        kind: None,
                    },
                ],
                by_service: BTreeMap::new(),
            },
            optimization: Optimization {
                potential_savings: Some(1278.72),
                recommendations_count: None,
                top_recommendations: vec![
                    Recommendation {
                        service: "Cloud SQL".to_string(),
                        message: "Consider right-sizing".to_string(),
                        potential_savings: Savings::Amount(1278.72),
                        kind: None,
                        confidence: None,
                    },
                    Recommendation {
                        service: "Compute Engine".to_string(),
                        message: "Optimize instance types".to_string(),
                        potential_savings: Savings::Amount(651.44),
                        kind: None,
                        confidence: None,
                    },
                ],
            },
            automation: Some(Automation {
                actions_executed: 3,
                success_rate: 0.95,
                recent_actions: vec![AutomationAction {
                    service: "Cloud SQL".to_string(),
                    action: "Right-sized instances".to_string(),
                    status: ActionStatus::Success,
                    message: None,
                }],
            }),
        }
    }

    /// Alerts with the given severity, in report order.
    pub fn alerts_with_severity<'a>(&'a self, severity: &'a Severity) -> impl Iterator<Item = &'a Alert> + 'a {
        self.monitoring.alerts.iter().filter(move |a| &a.severity == severity)
    }

    pub fn high_alerts(&self) -> Vec<&Alert> {
        self.alerts_with_severity(&Severity::High).collect()
    }

    /// Declared savings total, falling back to the sum of the readable
    /// recommendation amounts.
    pub fn potential_savings(&self) -> f64 {
        self.optimization.potential_savings.unwrap_or_else(|| {
            self.optimization
                .top_recommendations
                .iter()
                .filter_map(|r| r.potential_savings.amount())
                .sum()
        })
    }

    pub fn recommendations_count(&self) -> u64 {
        self.optimization
            .recommendations_count
            .unwrap_or(self.optimization.top_recommendations.len() as u64)
    }
}
