use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::MediaProcessor;
use crate::domain::{Category, ProcessingOutcome};

pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type";

/// Routes a stored file to the processor registered for its category and
/// folds the result into a [`ProcessingOutcome`].
pub struct ProcessingService {
    processors: HashMap<Category, Arc<dyn MediaProcessor>>,
}

impl ProcessingService {
    pub fn new(processors: Vec<(Category, Arc<dyn MediaProcessor>)>) -> Self {
        Self {
            processors: processors.into_iter().collect(),
        }
    }

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub async fn process(&self, path: &Path) -> ProcessingOutcome {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let category = Category::from_filename(&filename);

        let Some(processor) = self.processors.get(&category) else {
            tracing::error!(category = %category, "Unsupported file type");
            return ProcessingOutcome::failure(UNSUPPORTED_FILE_TYPE);
        };

        tracing::info!(category = %category, "Processing file");

        match processor.process(path).await {
            Ok(message) => ProcessingOutcome::success(message),
            Err(e) => {
                tracing::error!(category = %category, error = %e, "Processing failed");
                ProcessingOutcome::failure(e.to_string())
            }
        }
    }
}
