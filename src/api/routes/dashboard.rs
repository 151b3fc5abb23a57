use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use crate::api::models::{AlertQuery, AlertsResponse};
use crate::api::AppState;
use crate::dashboard::load_dashboard;
use crate::errors::CostDashError;
use crate::models::{DashboardReport, Severity};
use crate::reporting::html::render_page;
use crate::source::fetch_report;

/// The HTML dashboard. A failed load still renders the empty page.
pub async fn get_page(State(state): State<AppState>) -> Html<String> {
    let view = load_dashboard(state.source.as_ref(), &state.retry, &state.display).await;
    Html(render_page(&view))
}

pub async fn get_report(
    State(state): State<AppState>,
) -> Result<Json<DashboardReport>, CostDashError> {
    let report = fetch_report(state.source.as_ref(), &state.retry).await?;
    Ok(Json(report))
}

pub async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> Result<Json<AlertsResponse>, CostDashError> {
    let report = fetch_report(state.source.as_ref(), &state.retry).await?;

    let alerts: Vec<_> = match &query.severity {
        Some(s) => {
            let severity = Severity::from_filter(s);
            report.alerts_with_severity(&severity).cloned().collect()
        }
        None => report.monitoring.alerts.clone(),
    };

    Ok(Json(AlertsResponse {
        severity: query.severity,
        count: alerts.len(),
        alerts,
    }))
}
