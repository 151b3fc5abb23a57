use std::path::Path;
use crate::errors::CostDashError;
use super::types::CostDashConfig;
use super::security::validate_security_patterns;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<CostDashConfig, CostDashError> {
    if !path.exists() {
        return Err(CostDashError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(CostDashError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

/// Load the config at `path`, or defaults when no path is given.
pub async fn load_config(path: Option<&str>) -> Result<CostDashConfig, CostDashError> {
    match path {
        Some(p) => parse_config(Path::new(p)).await,
        None => Ok(CostDashConfig::default()),
    }
}

pub fn parse_config_str(content: &str) -> Result<CostDashConfig, CostDashError> {
    // An empty file is a valid, all-defaults config
    if content.trim().is_empty() {
        return Ok(CostDashConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    validate_security_patterns(&yaml)?;
    validate_schema(&yaml)?;

    let config: CostDashConfig = serde_yaml::from_value(yaml)?;
    validate_conflicts(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), CostDashError> {
    let json_value: serde_json::Value = serde_json::to_value(yaml)
        .map_err(|e| CostDashError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| CostDashError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory: typed deserialisation below is the hard check
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Reject values that parse but cannot work.
fn validate_conflicts(config: &CostDashConfig) -> Result<(), CostDashError> {
    if let Some(source) = &config.source {
        if source.timeout_secs == Some(0) {
            return Err(CostDashError::Config("source.timeout_secs must be at least 1".into()));
        }
        if source.max_bytes == Some(0) {
            return Err(CostDashError::Config("source.max_bytes must be at least 1".into()));
        }
        if let Some(location) = &source.location {
            if location.trim().is_empty() {
                return Err(CostDashError::Config("source.location is empty".into()));
            }
        }
    }

    if let Some(display) = &config.display {
        if display.max_recommendations == Some(0) {
            return Err(CostDashError::Config(
                "display.max_recommendations of 0 would hide every recommendation".into(),
            ));
        }
        if display.currency_symbol.as_deref() == Some("") {
            warn!("display.currency_symbol is empty, amounts will render without a symbol");
        }
    }

    Ok(())
}
