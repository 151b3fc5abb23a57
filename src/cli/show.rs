use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::commands::ShowArgs;
use crate::cli::progress;
use crate::cli::select_source;
use crate::config::{load_config, OutputFormat};
use crate::dashboard::{load_dashboard, DisplaySettings};
use crate::errors::{CostDashError, RetryConfig};
use crate::reporting::formatter::format_json;
use crate::reporting::{html, terminal};
use crate::source::{fetch_report, ReportSource};

pub async fn handle_show(args: ShowArgs, quiet: bool) -> Result<(), CostDashError> {
    let config = load_config(args.config.as_deref()).await?;

    let mut display = config.display_settings();
    if let Some(limit) = args.limit {
        display.max_recommendations = Some(limit as usize);
    }
    let format = args.format.unwrap_or_else(|| config.output_format());
    let retry = config.source_settings().retry;
    let source = select_source(args.location.as_deref(), args.sample, &config)?;

    info!(source = %source.describe(), format = %format, "Rendering dashboard");

    let Some(secs) = args.watch else {
        let rendered = render_once(source.as_ref(), &retry, &display, format, quiet).await?;
        return emit(&rendered, args.output.as_deref()).await;
    };

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let interval = Duration::from_secs(secs);
    loop {
        // A failed cycle is logged and the next one tries again
        match render_once(source.as_ref(), &retry, &display, format, true).await {
            Ok(rendered) => {
                if args.output.is_none() && format == OutputFormat::Text {
                    let _ = console::Term::stdout().clear_screen();
                }
                if let Err(e) = emit(&rendered, args.output.as_deref()).await {
                    warn!(error = %e, "Failed to write dashboard");
                }
            }
            Err(e) => warn!(error = %e, "Dashboard refresh failed"),
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    info!("Watch stopped");
    Ok(())
}

/// Load and render one frame. Text and HTML degrade to the empty dashboard
/// when the report cannot be loaded; JSON export propagates the error.
pub async fn render_once(
    source: &dyn ReportSource,
    retry: &RetryConfig,
    display: &DisplaySettings,
    format: OutputFormat,
    quiet: bool,
) -> Result<String, CostDashError> {
    let spinner = progress::fetch_spinner(&source.describe(), quiet);
    let rendered = match format {
        OutputFormat::Json => fetch_report(source, retry).await.and_then(|r| format_json(&r)),
        OutputFormat::Html => Ok(html::render_page(&load_dashboard(source, retry, display).await)),
        OutputFormat::Text => Ok(terminal::render_dashboard(&load_dashboard(source, retry, display).await)),
    };
    progress::finish(spinner);
    rendered
}

async fn emit(rendered: &str, output: Option<&str>) -> Result<(), CostDashError> {
    match output {
        Some(path) => {
            tokio::fs::write(path, rendered).await?;
            info!(path = %path, "Dashboard written");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
