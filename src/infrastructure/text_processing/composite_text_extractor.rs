use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{TextExtractionError, TextExtractor};
use crate::domain::extension_of;

/// Picks an extractor by the file's lowercase extension.
pub struct CompositeTextExtractor {
    adapters: HashMap<String, Arc<dyn TextExtractor>>,
}

impl CompositeTextExtractor {
    pub fn new(adapters: Vec<(&str, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters
                .into_iter()
                .map(|(ext, adapter)| (ext.to_lowercase(), adapter))
                .collect(),
        }
    }

    /// Plain text for `.txt`, PDF text for `.pdf`.
    pub fn with_defaults() -> Self {
        let text: Arc<dyn TextExtractor> = Arc::new(super::PlainTextAdapter);
        let pdf: Arc<dyn TextExtractor> = Arc::new(super::PdfAdapter::new());
        Self::new(vec![("txt", text), ("pdf", pdf)])
    }
}

#[async_trait]
impl TextExtractor for CompositeTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, TextExtractionError> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = extension_of(&filename).unwrap_or_default();

        let adapter = self.adapters.get(&extension).ok_or_else(|| {
            TextExtractionError::UnsupportedFileType(format!(
                "only .txt and .pdf files are supported, got {:?}",
                filename
            ))
        })?;

        adapter.extract_text(path).await
    }
}
