use bytes::Bytes;

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::StoredFile;

use super::storage_namer::StorageNamer;

pub struct LocalUploadStore {
    namer: StorageNamer,
}

impl LocalUploadStore {
    pub fn new(namer: StorageNamer) -> Self {
        Self { namer }
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(&self, filename: &str, data: Bytes) -> Result<StoredFile, UploadStoreError> {
        let stored = self.namer.name(filename).await?;

        tokio::fs::write(stored.as_path(), &data)
            .await
            .map_err(|source| UploadStoreError::Write {
                path: stored.path.clone(),
                source,
            })?;

        tracing::debug!(path = %stored, bytes = data.len(), "Upload written");
        Ok(stored)
    }
}
