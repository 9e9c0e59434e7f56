use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    ArtifactKind, ArtifactStore, MediaProcessor, ProcessorError, TranscriptionEngine,
};

use super::ensure_exists;

pub struct AudioProcessor {
    engine: Arc<dyn TranscriptionEngine>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl AudioProcessor {
    pub fn new(engine: Arc<dyn TranscriptionEngine>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self { engine, artifacts }
    }
}

#[async_trait]
impl MediaProcessor for AudioProcessor {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn process(&self, path: &Path) -> Result<String, ProcessorError> {
        ensure_exists(path).await?;

        let transcript = self.engine.transcribe(path).await?;
        let saved = self
            .artifacts
            .save(ArtifactKind::Transcription, path, &transcript)
            .await?;

        tracing::info!(artifact = %saved.display(), "Transcription saved");
        Ok(transcript)
    }
}
