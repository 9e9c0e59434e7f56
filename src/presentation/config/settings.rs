use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::storage::DirectoryNaming;

use super::Environment;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub storage: StorageSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub vision: VisionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<env>.toml` (optional) under `APP__*` variables,
    /// e.g. `APP__SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub upload_root: String,
    pub directory_naming: DirectoryNaming,
    pub artifacts_root: String,
    pub query_log_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            upload_root: "../uploads".to_string(),
            directory_naming: DirectoryNaming::Timestamp,
            artifacts_root: "..".to_string(),
            query_log_path: "output_document/chat_history.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub qa_model: String,
    pub demo_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            api_key: String::new(),
            qa_model: "gpt-4o-mini".to_string(),
            demo_model: "gpt-4".to_string(),
            max_tokens: 100,
            temperature: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            api_key: String::new(),
            model: "whisper-1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisionSettings {
    pub detector_url: String,
    pub api_key: String,
    pub threshold: f32,
    pub frames_per_second: f64,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
}

impl Default for VisionSettings {
    fn default() -> Self {
        Self {
            detector_url: "http://localhost:8080/predictions/fasterrcnn".to_string(),
            api_key: String::new(),
            threshold: 0.5,
            frames_per_second: 1.0,
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json_format: bool,
}
