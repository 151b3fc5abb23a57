pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::CostDashConfig;
use crate::dashboard::DisplaySettings;
use crate::errors::{CostDashError, RetryConfig};
use crate::source::{resolve_source, ReportSource};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ReportSource>,
    pub retry: RetryConfig,
    pub display: DisplaySettings,
}

pub fn create_app_state(location: &str, config: &CostDashConfig) -> Result<AppState, CostDashError> {
    let settings = config.source_settings();
    let source: Arc<dyn ReportSource> = Arc::from(resolve_source(location, &settings)?);
    Ok(AppState {
        source,
        retry: settings.retry,
        display: config.display_settings(),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(routes::dashboard::get_page))
        .route("/health", axum::routing::get(routes::health::health_check))
        .route("/api/dashboard", axum::routing::get(routes::dashboard::get_report))
        .route("/api/dashboard/alerts", axum::routing::get(routes::dashboard::get_alerts))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
