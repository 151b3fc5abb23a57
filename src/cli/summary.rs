use std::path::PathBuf;
use console::style;
use tracing::info;

use crate::cli::commands::SummaryArgs;
use crate::cli::progress;
use crate::cli::select_source;
use crate::config::load_config;
use crate::errors::CostDashError;
use crate::reporting::assemble_reports;
use crate::source::fetch_report;

pub async fn handle_summary(args: SummaryArgs, quiet: bool) -> Result<(), CostDashError> {
    let config = load_config(args.config.as_deref()).await?;
    let source = select_source(args.location.as_deref(), args.sample, &config)?;
    let output_dir = PathBuf::from(args.output_dir.unwrap_or_else(|| config.output_directory()));

    info!(source = %source.describe(), output = %output_dir.display(), "Writing summary reports");

    let spinner = progress::fetch_spinner(&source.describe(), quiet);
    let fetched = fetch_report(source.as_ref(), &config.source_settings().retry).await;
    progress::finish(spinner);
    let report = fetched?;

    let written = assemble_reports(&report, &output_dir, &config.display_settings()).await?;

    if !quiet {
        println!("\nSaving reports:");
        for path in [&written.summary, &written.html, &written.data] {
            println!("{} {}", style("✓").green(), path.display());
        }
    }
    Ok(())
}
