use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String, TextExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractionError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
