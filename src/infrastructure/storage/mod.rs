mod artifact_dir;
mod csv_query_log;
mod local_upload_store;
mod storage_namer;

pub use artifact_dir::ArtifactDir;
pub use csv_query_log::CsvQueryLog;
pub use local_upload_store::LocalUploadStore;
pub use storage_namer::{DirectoryNaming, StorageNamer, TIMESTAMP_FORMAT};
