mod artifact_store;
mod frame_sampler;
mod llm_client;
mod media_processor;
mod object_detector;
mod query_log;
mod text_extractor;
mod transcription_engine;
mod upload_store;

pub use artifact_store::{ArtifactKind, ArtifactStore, ArtifactStoreError};
pub use frame_sampler::{FrameSampler, FrameSamplerError, SampledFrame};
pub use llm_client::{LlmClient, LlmClientError};
pub use media_processor::{MediaProcessor, ProcessorError};
pub use object_detector::{DetectionError, ObjectDetector};
pub use query_log::{QueryLog, QueryLogError};
pub use text_extractor::{TextExtractionError, TextExtractor};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use upload_store::{UploadStore, UploadStoreError};
