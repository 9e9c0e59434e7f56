use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    ArtifactKind, ArtifactStore, DetectionError, MediaProcessor, ObjectDetector, ProcessorError,
};
use crate::domain::Detection;

use super::ensure_exists;

pub struct ImageProcessor {
    detector: Arc<dyn ObjectDetector>,
    artifacts: Arc<dyn ArtifactStore>,
    threshold: f32,
}

impl ImageProcessor {
    pub fn new(
        detector: Arc<dyn ObjectDetector>,
        artifacts: Arc<dyn ArtifactStore>,
        threshold: f32,
    ) -> Self {
        Self {
            detector,
            artifacts,
            threshold,
        }
    }
}

#[async_trait]
impl MediaProcessor for ImageProcessor {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn process(&self, path: &Path) -> Result<String, ProcessorError> {
        ensure_exists(path).await?;

        let image = tokio::fs::read(path)
            .await
            .map_err(|e| DetectionError::Unreadable(e.to_string()))?;

        let detections = self.detector.detect(&image).await?;
        let kept = Detection::above_threshold(detections, self.threshold);
        let descriptions: Vec<String> = kept.iter().map(Detection::to_string).collect();

        let artifact: String = descriptions.iter().map(|d| format!("{d}\n")).collect();
        let saved = self
            .artifacts
            .save(ArtifactKind::ImageObjects, path, &artifact)
            .await?;

        tracing::info!(
            artifact = %saved.display(),
            objects = descriptions.len(),
            "Object descriptions saved"
        );
        Ok(descriptions.join("\n"))
    }
}
