use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::{Category, ProcessingOutcome, StoredFile, secure_filename};

use super::ProcessingService;

#[derive(Debug)]
pub struct IntakeReport {
    pub stored: StoredFile,
    pub outcome: ProcessingOutcome,
}

/// Validates, persists and dispatches a single upload.
pub struct IntakeService {
    store: Arc<dyn UploadStore>,
    processing: Arc<ProcessingService>,
}

impl IntakeService {
    pub fn new(store: Arc<dyn UploadStore>, processing: Arc<ProcessingService>) -> Self {
        Self { store, processing }
    }

    pub async fn intake(&self, filename: &str, data: Bytes) -> Result<IntakeReport, IntakeError> {
        if filename.is_empty() {
            return Err(IntakeError::NoSelectedFile);
        }

        // Classify the name that will land on disk, which is what dispatch sees.
        let sanitized = secure_filename(filename);
        let category = Category::from_filename(&sanitized);
        if !category.is_supported() {
            return Err(IntakeError::UnsupportedFileType(filename.to_string()));
        }

        let stored = self.store.store(filename, data).await?;
        tracing::info!(path = %stored, category = %category, "Upload stored");

        let outcome = self.processing.process(&stored.as_path()).await;

        Ok(IntakeReport { stored, outcome })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("No selected file")]
    NoSelectedFile,
    #[error("Unsupported file type")]
    UnsupportedFileType(String),
    #[error(transparent)]
    Storage(#[from] UploadStoreError),
}
