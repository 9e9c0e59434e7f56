use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::ports::UploadStoreError;
use crate::domain::{StoredFile, secure_filename};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H-%M-%S";

/// How per-upload directories are named.
///
/// `Timestamp` reproduces the one-directory-per-second layout; two uploads of
/// the same file within a second land on the same path. `Unique` appends a
/// random suffix so concurrent uploads never share a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryNaming {
    #[default]
    Timestamp,
    Unique,
}

#[derive(Debug, Clone)]
pub struct StorageNamer {
    upload_root: PathBuf,
    naming: DirectoryNaming,
}

impl StorageNamer {
    pub fn new(upload_root: impl Into<PathBuf>, naming: DirectoryNaming) -> Self {
        Self {
            upload_root: upload_root.into(),
            naming,
        }
    }

    pub fn upload_root(&self) -> &Path {
        &self.upload_root
    }

    pub async fn name(&self, filename: &str) -> Result<StoredFile, UploadStoreError> {
        self.name_at(filename, Local::now().naive_local()).await
    }

    /// Sanitizes `filename`, derives the directory from `now` and creates it.
    pub async fn name_at(
        &self,
        filename: &str,
        now: NaiveDateTime,
    ) -> Result<StoredFile, UploadStoreError> {
        let sanitized = secure_filename(filename);
        if sanitized.is_empty() {
            return Err(UploadStoreError::EmptyFilename(filename.to_string()));
        }

        let directory = self.directory_name(now);
        let stored = StoredFile::new(&self.upload_root, directory, sanitized);

        let dir_path = self.upload_root.join(&stored.directory);
        tokio::fs::create_dir_all(&dir_path)
            .await
            .map_err(|source| UploadStoreError::CreateDirectory {
                path: dir_path.display().to_string(),
                source,
            })?;

        Ok(stored)
    }

    fn directory_name(&self, now: NaiveDateTime) -> String {
        let stamp = now.format(TIMESTAMP_FORMAT).to_string();
        match self.naming {
            DirectoryNaming::Timestamp => stamp,
            DirectoryNaming::Unique => format!("{} {}", stamp, Uuid::new_v4().simple()),
        }
    }
}
