use std::time::Duration;
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::errors::CostDashError;
use super::ReportSource;

/// One anonymous GET per fetch.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    max_bytes: u64,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration, max_bytes: u64) -> Result<Self, CostDashError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("costdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CostDashError::Config(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self {
            client,
            url: url.to_string(),
            max_bytes,
        })
    }
}

#[async_trait]
impl ReportSource for HttpSource {
    async fn fetch_raw(&self) -> Result<String, CostDashError> {
        let mut resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CostDashError::NotFound(self.url.clone()));
        }
        if !status.is_success() {
            return Err(CostDashError::Network(format!("{} returned {}", self.url, status)));
        }

        if let Some(len) = resp.content_length() {
            if len > self.max_bytes {
                return Err(CostDashError::Validation(format!(
                    "{} advertises {} bytes, limit is {}",
                    self.url, len, self.max_bytes
                )));
            }
        }

        // Chunked responses carry no length, so the limit is enforced while reading
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = resp.chunk().await? {
            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(CostDashError::Validation(format!(
                    "{} sent more than {} bytes",
                    self.url, self.max_bytes
                )));
            }
            body.extend_from_slice(&chunk);
        }

        String::from_utf8(body)
            .map_err(|e| CostDashError::Parse(format!("{} is not UTF-8: {}", self.url, e)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
