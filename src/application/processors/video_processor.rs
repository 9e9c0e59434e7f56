use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    ArtifactKind, ArtifactStore, FrameSampler, MediaProcessor, ObjectDetector, ProcessorError,
};
use crate::domain::{Detection, FrameDetections};

use super::ensure_exists;

pub struct VideoProcessor {
    sampler: Arc<dyn FrameSampler>,
    detector: Arc<dyn ObjectDetector>,
    artifacts: Arc<dyn ArtifactStore>,
    threshold: f32,
}

impl VideoProcessor {
    pub fn new(
        sampler: Arc<dyn FrameSampler>,
        detector: Arc<dyn ObjectDetector>,
        artifacts: Arc<dyn ArtifactStore>,
        threshold: f32,
    ) -> Self {
        Self {
            sampler,
            detector,
            artifacts,
            threshold,
        }
    }

    pub async fn describe_frames(&self, path: &Path) -> Result<FrameDetections, ProcessorError> {
        let frames = self.sampler.sample(path).await?;
        tracing::debug!(sampled = frames.len(), "Frames sampled");

        let mut described = FrameDetections::new();
        for frame in frames {
            let detections = self.detector.detect(&frame.image).await?;
            let kept = Detection::above_threshold(detections, self.threshold);
            described.insert(frame.index, &kept);
        }

        Ok(described)
    }
}

#[async_trait]
impl MediaProcessor for VideoProcessor {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn process(&self, path: &Path) -> Result<String, ProcessorError> {
        ensure_exists(path).await?;

        let described = self.describe_frames(path).await?;
        let lines = described.to_lines();

        let artifact: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let saved = self
            .artifacts
            .save(ArtifactKind::VideoDescriptions, path, &artifact)
            .await?;

        tracing::info!(
            artifact = %saved.display(),
            frames = described.len(),
            "Frame descriptions saved"
        );
        Ok(lines.join("\n"))
    }
}
