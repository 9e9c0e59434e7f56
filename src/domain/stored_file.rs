use std::fmt;
use std::path::{Path, PathBuf};

/// Where an upload landed on disk. Built once at intake and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub directory: String,
    pub filename: String,
    pub path: String,
}

impl StoredFile {
    pub fn new(upload_root: &Path, directory: String, filename: String) -> Self {
        let joined = upload_root.join(&directory).join(&filename);
        let path = joined.to_string_lossy().replace('\\', "/");
        Self {
            directory,
            filename,
            path,
        }
    }

    pub fn as_path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}

impl fmt::Display for StoredFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
