use clap::{Parser, Subcommand, Args};
use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "costdash", version, about = "Cloud cost monitoring dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard from a cost report
    Show(ShowArgs),
    /// Write the executive summary and a static HTML dashboard
    Summary(SummaryArgs),
    /// Serve the dashboard over HTTP
    Serve(ServeArgs),
    /// Check a cost report for shape and consistency problems
    Check(CheckArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Report file path or http(s) URL (default: configured source)
    pub location: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Use the built-in sample report
    #[arg(long)]
    pub sample: bool,

    /// Re-fetch and re-render every N seconds until interrupted
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<u64>,

    /// Maximum number of recommendations to show
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,
}

#[derive(Args, Clone)]
pub struct SummaryArgs {
    /// Report file path or http(s) URL (default: configured source)
    pub location: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory to write reports into (default: configured, else ./reports)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Use the built-in sample report
    #[arg(long)]
    pub sample: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Report file path or http(s) URL (default: configured source)
    pub location: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Serve the built-in sample report
    #[arg(long)]
    pub sample: bool,
}

#[derive(Args, Clone)]
pub struct CheckArgs {
    /// Report file path or http(s) URL
    pub location: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output findings as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_options() {
        let cli = Cli::try_parse_from([
            "costdash", "-vv", "show", "data/report.json", "--format", "html", "--limit", "3",
        ]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.location.as_deref(), Some("data/report.json"));
                assert_eq!(args.format, Some(OutputFormat::Html));
                assert_eq!(args.limit, Some(3));
                assert!(args.watch.is_none());
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_watch_zero_rejected() {
        assert!(Cli::try_parse_from(["costdash", "show", "--watch", "0"]).is_err());
    }

    #[test]
    fn test_check_requires_location() {
        assert!(Cli::try_parse_from(["costdash", "check"]).is_err());
    }
}
