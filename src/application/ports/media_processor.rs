use std::path::Path;

use async_trait::async_trait;

use super::{
    ArtifactStoreError, DetectionError, FrameSamplerError, TextExtractionError,
    TranscriptionError,
};

/// A category's processing collaborator: consumes a stored file and returns
/// the message reported back to the uploader.
#[async_trait]
pub trait MediaProcessor: Send + Sync {
    async fn process(&self, path: &Path) -> Result<String, ProcessorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    #[error("file does not exist: {0}")]
    MissingFile(String),
    #[error(transparent)]
    Extraction(#[from] TextExtractionError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Detection(#[from] DetectionError),
    #[error(transparent)]
    FrameSampling(#[from] FrameSamplerError),
    #[error("could not save artifact: {0}")]
    Artifact(#[from] ArtifactStoreError),
}
