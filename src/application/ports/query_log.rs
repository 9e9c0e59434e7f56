use std::io;

use crate::domain::QueryLogEntry;

#[async_trait::async_trait]
pub trait QueryLog: Send + Sync {
    async fn append(&self, entry: &QueryLogEntry) -> Result<(), QueryLogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QueryLogError {
    #[error("could not encode log row: {0}")]
    Encode(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
