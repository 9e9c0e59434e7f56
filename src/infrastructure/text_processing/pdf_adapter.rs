use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{TextExtractionError, TextExtractor};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, TextExtractionError> {
        let doc = PdfDocument::open(path).map_err(|e| {
            TextExtractionError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            TextExtractionError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(page = page_index, error = %e, "Failed to extract page text")
                }
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn extract_text(&self, path: &Path) -> Result<String, TextExtractionError> {
        let owned: PathBuf = path.to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| TextExtractionError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        if pages.is_empty() {
            // Scanned or image-only documents still count as processed.
            tracing::info!("PDF has no extractable text");
            return Ok(String::new());
        }

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");
        Ok(pages.concat())
    }
}
