use tracing::{error, info};

use crate::dashboard::view::{DashboardView, DisplaySettings};
use crate::errors::RetryConfig;
use crate::source::{fetch_report, ReportSource};

/// Fetch the report and populate a view. Any failure is logged and yields
/// the unpopulated view; this never returns an error.
pub async fn load_dashboard(
    source: &dyn ReportSource,
    retry: &RetryConfig,
    settings: &DisplaySettings,
) -> DashboardView {
    match fetch_report(source, retry).await {
        Ok(report) => {
            info!(
                source = %source.describe(),
                alerts = report.monitoring.alerts.len(),
                recommendations = report.optimization.top_recommendations.len(),
                "Dashboard data loaded"
            );
            DashboardView::populate(&report, settings)
        }
        Err(e) => {
            error!(source = %source.describe(), error = %e, "Error loading dashboard data");
            DashboardView::unpopulated(&settings.title)
        }
    }
}
