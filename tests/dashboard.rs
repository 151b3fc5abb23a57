use costdash::dashboard::{load_dashboard, DashboardView, DisplaySettings};
use costdash::errors::{CostDashError, RetryConfig};
use costdash::models::{DashboardReport, Severity};
use costdash::reporting::html::render_page;
use costdash::source::{fetch_report, resolve_source, FileSource, HttpSource, ReportSource, SourceSettings};
use axum::routing::get;
use axum::http::StatusCode;
use serde_json::json;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn static_export() -> serde_json::Value {
    json!({
        "TIMESTAMP": "2024-11-18 09:30:00",
        "MONITORING": {
            "total_cost": 6393.587,
            "anomalies": 4,
            "alerts": [
                { "type": "cost_threshold", "service": "Cloud SQL", "severity": "high", "message": "Cost threshold exceeded for Cloud SQL: $2,100.00" },
                { "type": "anomaly", "service": "Compute Engine", "severity": "medium", "message": "Anomaly detected in Compute Engine: Cost=$80.00" },
                { "type": "anomaly", "service": "BigQuery", "severity": "high", "message": "Anomaly detected in BigQuery: Cost=$450.10" },
                { "type": "anomaly", "service": "GCS", "severity": "low", "message": "Anomaly detected in GCS: Cost=$3.20" }
            ]
        },
        "OPTIMIZATION": {
            "potential_savings": 1930.16,
            "top_recommendations": [
                { "service": "Cloud SQL", "message": "Resource appears oversized. 75th percentile usage is 3.2", "potential_savings": 1278.72 },
                { "service": "Compute Engine", "message": "High cost variation detected. Consider implementing cost controls.", "potential_savings": "$651.44" }
            ]
        }
    })
}

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    let path = data_dir.join("dashboard_data.json");
    fs::write(&path, serde_json::to_string_pretty(&static_export()).unwrap()).unwrap();
    path
}

/// Serve `body` at /data/dashboard_data.json on an ephemeral port.
async fn spawn_report_server(body: String) -> String {
    let app = axum::Router::new()
        .route("/data/dashboard_data.json", get(move || async move { body }))
        .route("/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_file_report_populates_dom_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let source = FileSource::new(&path, 1 << 20);

    let view = load_dashboard(&source, &RetryConfig::default(), &DisplaySettings::default()).await;
    assert!(view.populated);
    assert_eq!(view.timestamp, "2024-11-18 09:30:00");
    assert_eq!(view.total_cost, "6393.59");
    assert_eq!(view.anomalies, "4");
    assert_eq!(view.potential_savings, "1930.16");
    assert_eq!(view.high_alerts, vec![
        "Cloud SQL: Cost threshold exceeded for Cloud SQL: $2,100.00".to_string(),
        "BigQuery: Anomaly detected in BigQuery: Cost=$450.10".to_string(),
    ]);
}

#[tokio::test]
async fn test_every_recommendation_rendered_once() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let source = FileSource::new(&path, 1 << 20);

    let view = load_dashboard(&source, &RetryConfig::default(), &DisplaySettings::default()).await;
    let html = render_page(&view);
    let first = "<li>Cloud SQL: Resource appears oversized. 75th percentile usage is 3.2 (Potential savings: 1278.72)</li>";
    let second = "<li>Compute Engine: High cost variation detected. Consider implementing cost controls. (Potential savings: $651.44)</li>";
    assert_eq!(html.matches(first).count(), 1);
    assert_eq!(html.matches(second).count(), 1);
}

#[tokio::test]
async fn test_http_source_fetches_report() {
    let base = spawn_report_server(static_export().to_string()).await;
    let source = resolve_source(&format!("{}/data/dashboard_data.json", base), &SourceSettings::default()).unwrap();

    let report = fetch_report(source.as_ref(), &RetryConfig::default()).await.unwrap();
    assert_eq!(report.monitoring.alerts.len(), 4);
    assert_eq!(report.high_alerts().len(), 2);
    assert_eq!(report.monitoring.alerts[3].severity, Severity::Low);
}

#[tokio::test]
async fn test_http_server_error_is_network_error() {
    let base = spawn_report_server(String::new()).await;
    let source = HttpSource::new(&format!("{}/broken", base), Duration::from_secs(5), 1 << 20).unwrap();

    let result = fetch_report(&source, &RetryConfig::default()).await;
    assert!(matches!(result, Err(CostDashError::Network(_))));
}

#[tokio::test]
async fn test_http_missing_path_is_not_found() {
    let base = spawn_report_server(String::new()).await;
    let source = HttpSource::new(&format!("{}/nope.json", base), Duration::from_secs(5), 1 << 20).unwrap();

    let result = fetch_report(&source, &RetryConfig::default()).await;
    assert!(matches!(result, Err(CostDashError::NotFound(_))));
}

#[tokio::test]
async fn test_http_oversized_body_rejected() {
    let base = spawn_report_server(static_export().to_string()).await;
    let source = HttpSource::new(&format!("{}/data/dashboard_data.json", base), Duration::from_secs(5), 16).unwrap();

    let result = fetch_report(&source, &RetryConfig::default()).await;
    assert!(matches!(result, Err(CostDashError::Validation(_))));
}

/// Answer one request with a chunked body of `chunks` pieces of `chunk_len` bytes.
async fn spawn_chunked_server(chunks: usize, chunk_len: usize) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let head = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nTransfer-Encoding: chunked\r\n\r\n";
        if socket.write_all(head.as_bytes()).await.is_err() {
            return;
        }
        let piece = format!("{:x}\r\n{}\r\n", chunk_len, " ".repeat(chunk_len));
        for _ in 0..chunks {
            if socket.write_all(piece.as_bytes()).await.is_err() {
                return;
            }
        }
        let _ = socket.write_all(b"0\r\n\r\n").await;
    });
    format!("http://{}/data/dashboard_data.json", addr)
}

#[tokio::test]
async fn test_http_chunked_body_over_limit_rejected() {
    let url = spawn_chunked_server(64, 1024).await;
    let source = HttpSource::new(&url, Duration::from_secs(5), 4096).unwrap();

    let result = source.fetch_raw().await;
    assert!(matches!(result, Err(CostDashError::Validation(_))));
}

#[tokio::test]
async fn test_http_chunked_body_under_limit_accepted() {
    let url = spawn_chunked_server(2, 16).await;
    let source = HttpSource::new(&url, Duration::from_secs(5), 4096).unwrap();

    let raw = source.fetch_raw().await.unwrap();
    assert_eq!(raw.len(), 32);
}

#[tokio::test]
async fn test_unreachable_http_leaves_dashboard_unpopulated() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpSource::new(&format!("http://{}/data/dashboard_data.json", addr), Duration::from_secs(2), 1 << 20).unwrap();
    let view = load_dashboard(&source, &RetryConfig::default(), &DisplaySettings::default()).await;
    assert_eq!(view, DashboardView::unpopulated("Cloud Cost Optimization"));
}

#[tokio::test]
async fn test_sample_report_json_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.json");
    fs::write(&path, serde_json::to_string(&DashboardReport::sample()).unwrap()).unwrap();

    let report = fetch_report(&FileSource::new(&path, 1 << 20), &RetryConfig::default()).await.unwrap();
    assert_eq!(report, DashboardReport::sample());
}
