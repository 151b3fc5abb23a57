use std::path::{Path, PathBuf};
use crate::dashboard::view::{DashboardView, DisplaySettings};
use crate::errors::CostDashError;
use crate::models::DashboardReport;
use crate::reporting::formatter::{format_json, format_summary};
use crate::reporting::html::render_page;
use tracing::info;

pub const SUMMARY_FILE: &str = "summary_report.txt";
pub const HTML_FILE: &str = "dashboard.html";
pub const DATA_FILE: &str = "data/dashboard_data.json";

/// Paths written by [`assemble_reports`].
#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub summary: PathBuf,
    pub html: PathBuf,
    pub data: PathBuf,
}

/// Write the executive summary, the static HTML dashboard and a normalised
/// copy of the data next to it.
pub async fn assemble_reports(
    report: &DashboardReport,
    output_dir: &Path,
    settings: &DisplaySettings,
) -> Result<WrittenReports, CostDashError> {
    tokio::fs::create_dir_all(output_dir.join("data")).await?;

    let generated_at = chrono::Local::now().naive_local();
    let summary_path = output_dir.join(SUMMARY_FILE);
    let summary = format_summary(report, generated_at, &settings.currency_symbol);
    tokio::fs::write(&summary_path, &summary).await?;
    info!(path = %summary_path.display(), "Summary report written");

    let view = DashboardView::populate(report, settings);
    let html_path = output_dir.join(HTML_FILE);
    tokio::fs::write(&html_path, render_page(&view)).await?;
    info!(path = %html_path.display(), "HTML dashboard written");

    let data_path = output_dir.join(DATA_FILE);
    tokio::fs::write(&data_path, format_json(report)?).await?;
    info!(path = %data_path.display(), "Dashboard data written");

    Ok(WrittenReports {
        summary: summary_path,
        html: html_path,
        data: data_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_assemble_writes_all_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("reports");
        let written = assemble_reports(&DashboardReport::sample(), &out, &DisplaySettings::default())
            .await
            .unwrap();

        let summary = std::fs::read_to_string(&written.summary).unwrap();
        assert!(summary.starts_with("Cloud Cost Optimization Summary"));

        let html = std::fs::read_to_string(&written.html).unwrap();
        assert!(html.contains("id=\"total-cost\">6393.59<"));

        let data = std::fs::read_to_string(&written.data).unwrap();
        let back: DashboardReport = serde_json::from_str(&data).unwrap();
        assert_eq!(back, DashboardReport::sample());
    }
}
