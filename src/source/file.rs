use std::path::PathBuf;
use async_trait::async_trait;

use crate::errors::CostDashError;
use super::ReportSource;

pub struct FileSource {
    path: PathBuf,
    max_bytes: u64,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self { path: path.into(), max_bytes }
    }
}

#[async_trait]
impl ReportSource for FileSource {
    async fn fetch_raw(&self) -> Result<String, CostDashError> {
        if !self.path.exists() {
            return Err(CostDashError::NotFound(self.path.display().to_string()));
        }

        let metadata = tokio::fs::metadata(&self.path).await?;
        if metadata.len() > self.max_bytes {
            return Err(CostDashError::Validation(format!(
                "{} is {} bytes, limit is {}",
                self.path.display(),
                metadata.len(),
                self.max_bytes
            )));
        }

        let bytes = tokio::fs::read(&self.path).await?;
        String::from_utf8(bytes).map_err(|e| {
            CostDashError::Parse(format!("{} is not UTF-8: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
