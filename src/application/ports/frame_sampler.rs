use std::path::Path;

use async_trait::async_trait;

/// A frame pulled out of a video, tagged with its index in the source stream.
#[derive(Debug, Clone)]
pub struct SampledFrame {
    pub index: u64,
    pub image: Vec<u8>,
}

#[async_trait]
pub trait FrameSampler: Send + Sync {
    async fn sample(&self, video_path: &Path) -> Result<Vec<SampledFrame>, FrameSamplerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FrameSamplerError {
    #[error("could not open video: {0}")]
    OpenFailed(String),
    #[error("could not read frame rate: {0}")]
    FrameRate(String),
    #[error("frame extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
