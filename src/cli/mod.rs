pub mod commands;
pub mod show;
pub mod summary;
pub mod serve;
pub mod check;
pub mod progress;

pub use commands::{Cli, Commands};

use crate::config::CostDashConfig;
use crate::errors::CostDashError;
use crate::models::DashboardReport;
use crate::source::{resolve_source, ReportSource, StaticSource};

/// Source for a command: the built-in sample, the explicit location, or the
/// configured one.
pub(crate) fn select_source(
    location: Option<&str>,
    sample: bool,
    config: &CostDashConfig,
) -> Result<Box<dyn ReportSource>, CostDashError> {
    if sample {
        return Ok(Box::new(StaticSource::new(DashboardReport::sample())));
    }
    let location = location
        .map(str::to_string)
        .unwrap_or_else(|| config.source_location());
    resolve_source(&location, &config.source_settings())
}
