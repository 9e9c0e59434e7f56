use std::io;

use bytes::Bytes;

use crate::domain::StoredFile;

#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    /// Names a destination for `filename`, creates its directory and writes `data`.
    async fn store(&self, filename: &str, data: Bytes) -> Result<StoredFile, UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("filename is empty after sanitizing: {0:?}")]
    EmptyFilename(String),
    #[error("could not create upload directory {path}: {source}")]
    CreateDirectory { path: String, source: io::Error },
    #[error("could not write upload {path}: {source}")]
    Write { path: String, source: io::Error },
}
