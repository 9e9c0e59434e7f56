use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::application::ports::{QueryLog, QueryLogError};
use crate::domain::QueryLogEntry;

/// Append-only CSV log of query/response pairs.
///
/// Appends are serialized through a mutex. The header row is written only by
/// whoever creates the file (`create_new`), so it appears exactly once.
pub struct CsvQueryLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvQueryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn open(&self) -> io::Result<(tokio::fs::File, bool)> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(file) => Ok((file, true)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                let file = OpenOptions::new().append(true).open(&self.path).await?;
                Ok((file, false))
            }
            Err(e) => Err(e),
        }
    }
}

fn encode_rows(entry: &QueryLogEntry, with_header: bool) -> Result<Vec<u8>, QueryLogError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if with_header {
        writer.write_record(QueryLogEntry::HEADER)?;
    }
    writer.write_record(entry.as_record())?;
    writer
        .into_inner()
        .map_err(|e| QueryLogError::Io(io::Error::other(e.to_string())))
}

#[async_trait::async_trait]
impl QueryLog for CsvQueryLog {
    async fn append(&self, entry: &QueryLogEntry) -> Result<(), QueryLogError> {
        let _guard = self.write_lock.lock().await;

        let (mut file, created) = self.open().await?;
        let rows = encode_rows(entry, created)?;

        file.write_all(&rows).await?;
        file.flush().await?;

        if created {
            tracing::info!(path = %self.path.display(), "Query log created");
        }
        Ok(())
    }
}
