use async_trait::async_trait;

use crate::domain::Detection;

#[async_trait]
pub trait ObjectDetector: Send + Sync {
    /// Returns every detection the model produced, unfiltered.
    async fn detect(&self, image: &[u8]) -> Result<Vec<Detection>, DetectionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("image unreadable: {0}")]
    Unreadable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
