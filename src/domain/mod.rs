mod category;
mod detection;
mod filename;
mod processing_outcome;
mod query_log_entry;
mod stored_file;

pub use category::{Category, extension_of};
pub use detection::{Detection, FrameDetections, NO_OBJECTS_DETECTED};
pub use filename::secure_filename;
pub use processing_outcome::ProcessingOutcome;
pub use query_log_entry::QueryLogEntry;
pub use stored_file::StoredFile;
