use std::fmt;
use serde_json::Value;
use tracing::warn;

use crate::models::{DashboardReport, Savings};
use super::schema::REPORT_SCHEMA;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub level: IssueLevel,
    pub path: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            IssueLevel::Error => "error",
            IssueLevel::Warning => "warning",
        };
        write!(f, "{}: {}: {}", level, self.path, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Structural schema messages. Advisory only.
    pub schema_messages: Vec<String>,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.level == IssueLevel::Error)
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue { level: IssueLevel::Error, path: path.into(), message: message.into() });
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue { level: IssueLevel::Warning, path: path.into(), message: message.into() });
    }
}

/// Check a raw report document: a schema pass followed by semantic checks on
/// the typed report.
pub fn validate_report(value: &Value) -> ValidationReport {
    let mut result = ValidationReport {
        schema_messages: schema_messages(value),
        ..Default::default()
    };

    let report: DashboardReport = match serde_json::from_value(value.clone()) {
        Ok(r) => r,
        Err(e) => {
            result.error("$", format!("report does not match the expected shape: {}", e));
            return result;
        }
    };

    check_monitoring(&report, &mut result);
    check_optimization(&report, &mut result);
    check_automation(&report, &mut result);
    result
}

fn schema_messages(value: &Value) -> Vec<String> {
    let compiled = match jsonschema::JSONSchema::compile(&REPORT_SCHEMA) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Report schema failed to compile");
            return Vec::new();
        }
    };

    let messages: Vec<String> = match compiled.validate(value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect(),
    };
    messages
}

fn check_monitoring(report: &DashboardReport, result: &mut ValidationReport) {
    let monitoring = &report.monitoring;
    if monitoring.total_cost < 0.0 {
        result.error("monitoring.total_cost", format!("negative total cost {}", monitoring.total_cost));
    }

    for (service, cost) in &monitoring.by_service {
        if *cost < 0.0 {
            result.error(format!("monitoring.by_service.{}", service), format!("negative cost {}", cost));
        }
    }

    let anomaly_alerts = monitoring
        .alerts
        .iter()
        .filter(|a| a.kind.as_deref() == Some("anomaly"))
        .count() as u64;
    if monitoring.anomalies < anomaly_alerts {
        result.warning(
            "monitoring.anomalies",
            format!("{} anomalies declared but {} anomaly alerts listed", monitoring.anomalies, anomaly_alerts),
        );
    }

    for (i, alert) in monitoring.alerts.iter().enumerate() {
        if alert.service.trim().is_empty() {
            result.error(format!("monitoring.alerts[{}].service", i), "empty service name");
        }
    }
}

fn check_optimization(report: &DashboardReport, result: &mut ValidationReport) {
    let optimization = &report.optimization;
    if let Some(total) = optimization.potential_savings {
        if total < 0.0 {
            result.error("optimization.potential_savings", format!("negative savings {}", total));
        }
    }

    if let Some(count) = optimization.recommendations_count {
        if count < optimization.top_recommendations.len() as u64 {
            result.warning(
                "optimization.recommendations_count",
                format!("count {} is below the {} listed recommendations", count, optimization.top_recommendations.len()),
            );
        }
    }

    for (i, rec) in optimization.top_recommendations.iter().enumerate() {
        let path = format!("optimization.top_recommendations[{}]", i);
        if rec.service.trim().is_empty() {
            result.error(format!("{}.service", path), "empty service name");
        }
        match (&rec.potential_savings, rec.potential_savings.amount()) {
            (_, Some(v)) if v < 0.0 => {
                result.warning(format!("{}.potential_savings", path), format!("negative savings {}", v));
            }
            (Savings::Text(s), None) if !s.trim().ends_with('%') => {
                result.warning(format!("{}.potential_savings", path), format!("unreadable amount {:?}", s));
            }
            _ => {}
        }
    }
}

fn check_automation(report: &DashboardReport, result: &mut ValidationReport) {
    let Some(automation) = &report.automation else {
        return;
    };
    if !(0.0..=1.0).contains(&automation.success_rate) {
        result.error(
            "automation.success_rate",
            format!("{} is outside [0, 1]", automation.success_rate),
        );
    }
    if automation.recent_actions.len() as u64 > automation.actions_executed {
        result.warning(
            "automation.recent_actions",
            format!(
                "{} recent actions listed but only {} executed",
                automation.recent_actions.len(),
                automation.actions_executed
            ),
        );
    }
}
