mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment, UnknownEnvironment};
pub use settings::{
    CorsSettings, LlmSettings, LoggingSettings, ServerSettings, Settings, StorageSettings,
    TranscriptionSettings, VisionSettings,
};
