use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use super::types::CostDashError;

const MAX_DELAY: Duration = Duration::from_secs(30);

/// Retry policy for report fetches. The default is a single attempt.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    /// Wait before retry number `attempt` (0-indexed): `base * 2^attempt`
    /// plus up to one `base` of jitter, capped at 30s.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let base = self.base_delay.as_secs_f64();
        let backoff = base * 2.0_f64.powi(attempt.min(16) as i32);
        let jitter = rand::random::<f64>() * base;
        Duration::from_secs_f64(backoff + jitter).min(MAX_DELAY)
    }
}

/// Run `factory` until it succeeds, returns a non-retryable error, or the
/// retry budget is spent.
pub async fn with_retry<F, Fut, T>(
    operation_name: &str,
    config: &RetryConfig,
    mut factory: F,
) -> Result<T, CostDashError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CostDashError>>,
{
    let mut attempt = 0;
    loop {
        let err = match factory().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        let class = err.classify();
        if !class.retryable {
            debug!(operation = operation_name, error_type = class.error_type, "Not retryable");
            return Err(err);
        }
        if attempt >= config.max_retries {
            if config.max_retries > 0 {
                warn!(operation = operation_name, attempts = attempt + 1, "Retries exhausted");
            }
            return Err(err);
        }

        let delay = config.delay_for(attempt);
        warn!(
            operation = operation_name,
            attempt = attempt + 1,
            max_retries = config.max_retries,
            error_type = class.error_type,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "Retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
