use console::style;
use serde_json::json;
use tracing::info;

use crate::cli::commands::CheckArgs;
use crate::config::load_config;
use crate::errors::{with_retry, CostDashError, RetryConfig};
use crate::source::{resolve_source, ReportSource};
use crate::validation::{validate_report, IssueLevel};

pub async fn handle_check(args: CheckArgs) -> Result<(), CostDashError> {
    let config = load_config(args.config.as_deref()).await?;
    let source = resolve_source(&args.location, &config.source_settings())?;
    info!(source = %source.describe(), "Checking report");

    let value = fetch_document(source.as_ref(), &config.source_settings().retry).await?;

    let result = validate_report(&value);
    let errors = result.issues.iter().filter(|i| i.level == IssueLevel::Error).count();

    if args.json {
        let issues: Vec<_> = result
            .issues
            .iter()
            .map(|i| json!({
                "level": if i.level == IssueLevel::Error { "error" } else { "warning" },
                "path": i.path,
                "message": i.message,
            }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&json!({
            "source": source.describe(),
            "schema": result.schema_messages,
            "issues": issues,
        }))?);
    } else {
        for msg in &result.schema_messages {
            println!("  {} {}", style("schema").dim(), msg);
        }
        for issue in &result.issues {
            let marker = match issue.level {
                IssueLevel::Error => style("✗").red().to_string(),
                IssueLevel::Warning => style("⚠").yellow().to_string(),
            };
            println!("  {} {}", marker, issue);
        }
        if result.issues.is_empty() && result.schema_messages.is_empty() {
            println!("{} {} looks consistent", style("✓").green(), source.describe());
        }
    }

    if result.has_errors() {
        return Err(CostDashError::Validation(format!(
            "{} error(s) in {}",
            errors,
            source.describe()
        )));
    }
    Ok(())
}

/// Raw JSON of the report, fetched under the same retry policy as `show`.
async fn fetch_document(
    source: &dyn ReportSource,
    retry: &RetryConfig,
) -> Result<serde_json::Value, CostDashError> {
    let raw = with_retry("check_report", retry, || source.fetch_raw()).await?;
    serde_json::from_str(&raw)
        .map_err(|e| CostDashError::Parse(format!("{}: {}", source.describe(), e)))
}
