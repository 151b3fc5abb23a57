use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostDashError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Report parse error: {0}")]
    Parse(String),

    #[error("Report validation failed: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for CostDashError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CostDashError::Timeout(err.to_string())
        } else if err.is_decode() {
            CostDashError::Parse(err.to_string())
        } else {
            CostDashError::Network(err.to_string())
        }
    }
}

impl CostDashError {
    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CostDashError::Config(_) => 2,
            CostDashError::NotFound(_) => 3,
            CostDashError::Network(_) | CostDashError::Timeout(_) => 4,
            CostDashError::Validation(_) => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CostDashError::Config("x".into()).exit_code(), 2);
        assert_eq!(CostDashError::NotFound("x".into()).exit_code(), 3);
        assert_eq!(CostDashError::Network("x".into()).exit_code(), 4);
        assert_eq!(CostDashError::Timeout("x".into()).exit_code(), 4);
        assert_eq!(CostDashError::Validation("x".into()).exit_code(), 5);
        assert_eq!(CostDashError::Internal("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_display_includes_context() {
        let err = CostDashError::NotFound("data/dashboard_data.json".into());
        assert_eq!(err.to_string(), "Report not found: data/dashboard_data.json");
    }
}
