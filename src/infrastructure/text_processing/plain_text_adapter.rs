use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{TextExtractionError, TextExtractor};

pub struct PlainTextAdapter;

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract_text(&self, path: &Path) -> Result<String, TextExtractionError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| TextExtractionError::NotFound(format!("{}: {}", path.display(), e)))?;

        String::from_utf8(data).map_err(|e| TextExtractionError::ExtractionFailed(e.to_string()))
    }
}
