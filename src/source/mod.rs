pub mod file;
pub mod http;

use std::time::Duration;
use async_trait::async_trait;
use tracing::debug;

use crate::errors::{with_retry, CostDashError, RetryConfig};
use crate::models::DashboardReport;

pub use file::FileSource;
pub use http::HttpSource;

pub const DEFAULT_LOCATION: &str = "data/dashboard_data.json";
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Somewhere a pre-computed report can be read from.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the raw JSON document.
    async fn fetch_raw(&self) -> Result<String, CostDashError>;

    /// Human-readable location for logs and errors.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub timeout: Duration,
    pub max_bytes: u64,
    pub retry: RetryConfig,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_bytes: DEFAULT_MAX_BYTES,
            retry: RetryConfig::default(),
        }
    }
}

/// Serves a report held in memory, e.g. the built-in sample.
pub struct StaticSource {
    report: DashboardReport,
}

impl StaticSource {
    pub fn new(report: DashboardReport) -> Self {
        Self { report }
    }
}

#[async_trait]
impl ReportSource for StaticSource {
    async fn fetch_raw(&self) -> Result<String, CostDashError> {
        Ok(serde_json::to_string(&self.report)?)
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}

/// Pick a source for `location`: `http://` and `https://` go over the
/// network, anything else is a filesystem path.
pub fn resolve_source(
    location: &str,
    settings: &SourceSettings,
) -> Result<Box<dyn ReportSource>, CostDashError> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(CostDashError::Config("Report location is empty".into()));
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(Box::new(HttpSource::new(trimmed, settings.timeout, settings.max_bytes)?))
    } else {
        Ok(Box::new(FileSource::new(trimmed, settings.max_bytes)))
    }
}

/// Fetch and parse a report. Transport failures are retried per `retry`;
/// a document that does not parse is not.
pub async fn fetch_report(
    source: &dyn ReportSource,
    retry: &RetryConfig,
) -> Result<DashboardReport, CostDashError> {
    let raw = with_retry("fetch_report", retry, || source.fetch_raw()).await?;
    debug!(source = %source.describe(), bytes = raw.len(), "Report fetched");
    parse_report(&raw)
        .map_err(|e| CostDashError::Parse(format!("{}: {}", source.describe(), e)))
}

pub fn parse_report(raw: &str) -> Result<DashboardReport, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_http() {
        let source = resolve_source("https://costs.example.com/data/dashboard_data.json", &SourceSettings::default()).unwrap();
        assert_eq!(source.describe(), "https://costs.example.com/data/dashboard_data.json");
    }

    #[test]
    fn test_resolve_path() {
        let source = resolve_source("data/dashboard_data.json", &SourceSettings::default()).unwrap();
        assert_eq!(source.describe(), "data/dashboard_data.json");
    }

    #[test]
    fn test_resolve_empty_is_config_error() {
        assert!(matches!(
            resolve_source("  ", &SourceSettings::default()),
            Err(CostDashError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_static_source_round_trips() {
        let source = StaticSource::new(DashboardReport::sample());
        let report = fetch_report(&source, &RetryConfig::default()).await.unwrap();
        assert_eq!(report, DashboardReport::sample());
    }
}
