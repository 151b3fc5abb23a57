use std::sync::Arc;
use crate::cli::commands::ServeArgs;
use crate::config::load_config;
use crate::errors::CostDashError;
use crate::api;
use crate::models::DashboardReport;
use crate::source::StaticSource;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), CostDashError> {
    let config = load_config(args.config.as_deref()).await?;
    let location = args.location.clone().unwrap_or_else(|| config.source_location());

    let mut state = api::create_app_state(&location, &config)?;
    if args.sample {
        state.source = Arc::new(StaticSource::new(DashboardReport::sample()));
    }
    info!(source = %state.source.describe(), "Serving dashboard");

    let app = api::build_router(state);

    let (host, port) = config.server_addr();
    let addr = format!("{}:{}", args.host.unwrap_or(host), args.port.unwrap_or(port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CostDashError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
