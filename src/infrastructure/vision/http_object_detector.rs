use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{DetectionError, ObjectDetector};
use crate::domain::Detection;

use super::coco_labels::coco_label;

/// Client for a hosted detection model (e.g. a TorchServe Faster R-CNN
/// handler). The endpoint takes raw image bytes and answers with
/// `[{"label": <coco index>, "score": <float>}, ...]`.
pub struct HttpObjectDetector {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct RawDetection {
    label: u32,
    score: f32,
}

impl HttpObjectDetector {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }
}

#[async_trait]
impl ObjectDetector for HttpObjectDetector {
    async fn detect(&self, image: &[u8]) -> Result<Vec<Detection>, DetectionError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec());
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DetectionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "Detector returned an error");
            return Err(DetectionError::ApiRequestFailed(format!("status {}", status)));
        }

        let raw: Vec<RawDetection> = response
            .json()
            .await
            .map_err(|e| DetectionError::InvalidResponse(e.to_string()))?;

        tracing::debug!(detections = raw.len(), "Detector responded");

        Ok(raw
            .into_iter()
            .map(|d| Detection::new(coco_label(d.label), d.score))
            .collect())
    }
}
