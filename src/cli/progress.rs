use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while a report is fetched. `None` when output is
/// quiet or stderr is not a terminal.
pub fn fetch_spinner(location: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet || !console::Term::stderr().is_term() {
        return None;
    }

    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    bar.set_style(style);
    bar.set_message(format!("Loading {}", location));
    bar.enable_steady_tick(Duration::from_millis(120));
    Some(bar)
}

pub fn finish(bar: Option<ProgressBar>) {
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
}
