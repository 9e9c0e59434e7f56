use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Side-channel outputs written next to (not inside) the upload tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    ProcessedText,
    Transcription,
    ImageObjects,
    VideoDescriptions,
}

impl ArtifactKind {
    pub fn directory(&self) -> &'static str {
        match self {
            ArtifactKind::ProcessedText => "processed_content",
            ArtifactKind::Transcription => "processed_audio",
            ArtifactKind::ImageObjects => "processed_images",
            ArtifactKind::VideoDescriptions => "processed_videos",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::ProcessedText => "processed",
            ArtifactKind::Transcription => "transcription",
            ArtifactKind::ImageObjects => "objects",
            ArtifactKind::VideoDescriptions => "descriptions",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directory())
    }
}

#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn save(
        &self,
        kind: ArtifactKind,
        source: &Path,
        content: &str,
    ) -> Result<PathBuf, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("source path has no file stem: {0}")]
    MissingStem(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
