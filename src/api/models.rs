use serde::{Deserialize, Serialize};
use crate::models::Alert;

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    /// Only alerts with this severity; all alerts when absent.
    pub severity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub severity: Option<String>,
    pub count: usize,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub build: Option<&'static str>,
    pub built_at: &'static str,
}
