use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::dashboard::DisplaySettings;
use crate::errors::RetryConfig;
use crate::source::{SourceSettings, DEFAULT_LOCATION};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CostDashConfig {
    pub source: Option<SourceConfig>,
    pub display: Option<DisplayConfig>,
    pub server: Option<ServerConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SourceConfig {
    /// File path or http(s) URL of the report.
    pub location: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub max_bytes: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DisplayConfig {
    pub title: Option<String>,
    pub currency_symbol: Option<String>,
    pub max_recommendations: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CostDashConfig {
    pub fn source_location(&self) -> String {
        self.source
            .as_ref()
            .and_then(|s| s.location.clone())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string())
    }

    pub fn source_settings(&self) -> SourceSettings {
        let defaults = SourceSettings::default();
        let Some(source) = &self.source else {
            return defaults;
        };
        SourceSettings {
            timeout: source.timeout_secs.map(Duration::from_secs).unwrap_or(defaults.timeout),
            max_bytes: source.max_bytes.unwrap_or(defaults.max_bytes),
            retry: RetryConfig {
                max_retries: source.max_retries.unwrap_or(defaults.retry.max_retries),
                ..defaults.retry
            },
        }
    }

    pub fn display_settings(&self) -> DisplaySettings {
        let defaults = DisplaySettings::default();
        let Some(display) = &self.display else {
            return defaults;
        };
        DisplaySettings {
            title: display.title.clone().unwrap_or(defaults.title),
            currency_symbol: display.currency_symbol.clone().unwrap_or(defaults.currency_symbol),
            max_recommendations: display.max_recommendations,
        }
    }

    pub fn server_addr(&self) -> (String, u16) {
        let server = self.server.clone().unwrap_or_default();
        (
            server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server.port.unwrap_or(DEFAULT_PORT),
        )
    }

    pub fn output_directory(&self) -> String {
        self.output
            .as_ref()
            .and_then(|o| o.directory.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().and_then(|o| o.format).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CostDashConfig::default();
        assert_eq!(config.source_location(), "data/dashboard_data.json");
        assert_eq!(config.server_addr(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(config.output_directory(), "reports");
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.display_settings(), DisplaySettings::default());
        assert_eq!(config.source_settings().retry.max_retries, 0);
    }

    #[test]
    fn test_source_settings_from_yaml() {
        let config: CostDashConfig = serde_yaml::from_str(
            "source:\n  location: https://costs.example.com/dashboard.json\n  timeout_secs: 3\n  max_retries: 2\n"
        ).unwrap();
        let settings = config.source_settings();
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert_eq!(settings.retry.max_retries, 2);
        assert_eq!(settings.max_bytes, crate::source::DEFAULT_MAX_BYTES);
        assert_eq!(config.source_location(), "https://costs.example.com/dashboard.json");
    }

    #[test]
    fn test_display_settings_partial_override() {
        let config: CostDashConfig = serde_yaml::from_str(
            "display:\n  currency_symbol: '€'\n  max_recommendations: 3\n"
        ).unwrap();
        let settings = config.display_settings();
        assert_eq!(settings.title, "Cloud Cost Optimization");
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.max_recommendations, Some(3));
    }

    #[test]
    fn test_output_format_deserialize() {
        let parsed: OutputFormat = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(parsed, OutputFormat::Html);
        assert_eq!(format!("{}", OutputFormat::Json), "json");
    }
}
