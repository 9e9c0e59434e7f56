use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    ArtifactKind, ArtifactStore, MediaProcessor, ProcessorError, TextExtractor,
};

use super::ensure_exists;

pub struct TextProcessor {
    extractor: Arc<dyn TextExtractor>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl TextProcessor {
    pub fn new(extractor: Arc<dyn TextExtractor>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self {
            extractor,
            artifacts,
        }
    }
}

#[async_trait]
impl MediaProcessor for TextProcessor {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn process(&self, path: &Path) -> Result<String, ProcessorError> {
        ensure_exists(path).await?;

        let text = self.extractor.extract_text(path).await?;
        let saved = self
            .artifacts
            .save(ArtifactKind::ProcessedText, path, &text)
            .await?;

        tracing::info!(artifact = %saved.display(), chars = text.len(), "Processed content saved");
        Ok(text)
    }
}
