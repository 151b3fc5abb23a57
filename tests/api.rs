use axum::http::StatusCode;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::Value;
use costdash::api::{build_router, create_app_state, AppState};
use costdash::config::CostDashConfig;
use costdash::dashboard::DisplaySettings;
use costdash::errors::RetryConfig;
use costdash::models::{Alert, DashboardReport, Severity};
use costdash::source::StaticSource;
use std::sync::Arc;
use tempfile::TempDir;

fn sample_state() -> AppState {
    AppState {
        source: Arc::new(StaticSource::new(DashboardReport::sample())),
        retry: RetryConfig::default(),
        display: DisplaySettings::default(),
    }
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn get(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_text(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app(&sample_state()).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "costdash");
}

#[tokio::test]
async fn test_dashboard_page_populated() {
    let response = app(&sample_state()).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = response_text(response).await;
    assert!(html.contains("<span id=\"total-cost\">6393.59</span>"));
    assert!(html.contains("<ul id=\"high-alerts\"><li>Cloud SQL: Cost spike detected</li></ul>"));
}

#[tokio::test]
async fn test_dashboard_page_unpopulated_when_source_missing() {
    let dir = TempDir::new().unwrap();
    let location = dir.path().join("dashboard_data.json");
    let state = create_app_state(location.to_str().unwrap(), &CostDashConfig::default()).unwrap();

    let response = app(&state).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = response_text(response).await;
    assert!(html.contains("<span id=\"total-cost\"></span>"));
    assert!(html.contains("<ul id=\"top-recommendations\"></ul>"));
}

#[tokio::test]
async fn test_report_endpoint_normalises() {
    let response = app(&sample_state()).oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["monitoring"]["total_cost"], 6393.59);
    assert_eq!(body["optimization"]["top_recommendations"].as_array().unwrap().len(), 2);
    assert_eq!(body["automation"]["recent_actions"][0]["status"], "success");
}

#[tokio::test]
async fn test_report_endpoint_missing_source_is_bad_gateway() {
    let dir = TempDir::new().unwrap();
    let location = dir.path().join("absent.json");
    let state = create_app_state(location.to_str().unwrap(), &CostDashConfig::default()).unwrap();

    let response = app(&state).oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Report not found"));
}

#[tokio::test]
async fn test_report_endpoint_malformed_is_bad_gateway() {
    let dir = TempDir::new().unwrap();
    let location = dir.path().join("dashboard_data.json");
    std::fs::write(&location, "not json").unwrap();
    let state = create_app_state(location.to_str().unwrap(), &CostDashConfig::default()).unwrap();

    let response = app(&state).oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_alerts_filtered_by_severity() {
    let response = app(&sample_state()).oneshot(get("/api/dashboard/alerts?severity=HIGH")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["alerts"][0]["service"], "Cloud SQL");
    assert_eq!(body["alerts"][0]["severity"], "high");
}

#[tokio::test]
async fn test_alerts_unfiltered() {
    let response = app(&sample_state()).oneshot(get("/api/dashboard/alerts")).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["count"], 2);
    assert!(body["severity"].is_null());
}

#[tokio::test]
async fn test_alerts_filter_keeps_unknown_severity_case() {
    let mut report = DashboardReport::sample();
    report.monitoring.alerts.push(Alert {
        service: "BigQuery".to_string(),
        severity: Severity::Other("Critical".to_string()),
        message: "Slot usage tripled".to_string(),
        kind: None,
    });
    let state = AppState {
        source: Arc::new(StaticSource::new(report)),
        retry: RetryConfig::default(),
        display: DisplaySettings::default(),
    };

    let response = app(&state).oneshot(get("/api/dashboard/alerts?severity=Critical")).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["alerts"][0]["service"], "BigQuery");
    assert_eq!(body["alerts"][0]["severity"], "Critical");
}
