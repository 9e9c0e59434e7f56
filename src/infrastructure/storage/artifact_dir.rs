use std::path::{Path, PathBuf};

use crate::application::ports::{ArtifactKind, ArtifactStore, ArtifactStoreError};

/// Writes `<root>/<kind dir>/<stem>_<suffix>.txt`, overwriting earlier runs
/// for the same stem.
pub struct ArtifactDir {
    root: PathBuf,
}

impl ArtifactDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, kind: ArtifactKind, source: &Path) -> Result<PathBuf, ArtifactStoreError> {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ArtifactStoreError::MissingStem(source.display().to_string()))?;

        Ok(self
            .root
            .join(kind.directory())
            .join(format!("{}_{}.txt", stem, kind.suffix())))
    }
}

#[async_trait::async_trait]
impl ArtifactStore for ArtifactDir {
    async fn save(
        &self,
        kind: ArtifactKind,
        source: &Path,
        content: &str,
    ) -> Result<PathBuf, ArtifactStoreError> {
        let target = self.path_for(kind, source)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, content).await?;
        Ok(target)
    }
}
