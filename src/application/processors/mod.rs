mod audio_processor;
mod image_processor;
mod text_processor;
mod video_processor;

use std::path::Path;

pub use audio_processor::AudioProcessor;
pub use image_processor::ImageProcessor;
pub use text_processor::TextProcessor;
pub use video_processor::VideoProcessor;

use crate::application::ports::ProcessorError;

async fn ensure_exists(path: &Path) -> Result<(), ProcessorError> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => Ok(()),
        _ => {
            tracing::error!(path = %path.display(), "File does not exist");
            Err(ProcessorError::MissingFile(path.display().to_string()))
        }
    }
}
