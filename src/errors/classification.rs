use super::types::CostDashError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub retryable: bool,
}

impl CostDashError {
    /// Transport failures are retryable; anything derived from the report
    /// bytes or the local configuration fails the same way every time.
    pub fn classify(&self) -> ErrorClassification {
        let (error_type, retryable) = match self {
            CostDashError::Network(_) => ("NetworkError", true),
            CostDashError::Timeout(_) => ("TimeoutError", true),
            CostDashError::Io(e) => ("IoError", io_is_transient(e.kind())),
            CostDashError::Config(_) => ("ConfigError", false),
            CostDashError::NotFound(_) => ("NotFoundError", false),
            CostDashError::Parse(_) => ("ParseError", false),
            CostDashError::Validation(_) => ("ValidationError", false),
            CostDashError::Json(_) => ("JsonError", false),
            CostDashError::Yaml(_) => ("YamlError", false),
            CostDashError::Internal(_) => ("InternalError", false),
        };
        ErrorClassification { error_type, retryable }
    }
}

/// Local I/O is only worth retrying when the failure is about timing.
/// Permission problems and bad data fail identically on every attempt.
fn io_is_transient(kind: std::io::ErrorKind) -> bool {
    use std::io::ErrorKind;

    matches!(
        kind,
        ErrorKind::Interrupted
            | ErrorKind::TimedOut
            | ErrorKind::WouldBlock
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::ConnectionRefused
            | ErrorKind::UnexpectedEof
    )
}
