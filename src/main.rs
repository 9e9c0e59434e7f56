use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tokio::net::TcpListener;

use anote_intake::application::ports::{
    ArtifactStore, LlmClient, MediaProcessor, ObjectDetector, QueryLog,
};
use anote_intake::application::processors::{
    AudioProcessor, ImageProcessor, TextProcessor, VideoProcessor,
};
use anote_intake::application::services::{
    DemoChatService, IntakeService, ProcessingService, QueryService,
};
use anote_intake::domain::Category;
use anote_intake::infrastructure::audio::OpenAiWhisperEngine;
use anote_intake::infrastructure::llm::OpenAiChatClient;
use anote_intake::infrastructure::observability::{TracingConfig, init_tracing};
use anote_intake::infrastructure::storage::{
    ArtifactDir, CsvQueryLog, LocalUploadStore, StorageNamer,
};
use anote_intake::infrastructure::text_processing::CompositeTextExtractor;
use anote_intake::infrastructure::vision::{FfmpegFrameSampler, HttpObjectDetector};
use anote_intake::presentation::{AppState, Environment, Settings, create_router};

fn api_key_or_env(configured: &str) -> String {
    if configured.is_empty() {
        std::env::var("OPENAI_API_KEY").unwrap_or_default()
    } else {
        configured.to_string()
    }
}

fn build_processing_service(settings: &Settings) -> ProcessingService {
    let artifacts: Arc<dyn ArtifactStore> =
        Arc::new(ArtifactDir::new(&settings.storage.artifacts_root));

    let detector: Arc<dyn ObjectDetector> = Arc::new(HttpObjectDetector::new(
        settings.vision.detector_url.clone(),
        Some(settings.vision.api_key.clone()),
    ));

    let transcription = &settings.transcription;
    let whisper = OpenAiWhisperEngine::new(
        api_key_or_env(&transcription.api_key),
        Some(transcription.base_url.clone()),
        Some(transcription.model.clone()),
    );

    let sampler = FfmpegFrameSampler::new(
        &settings.vision.ffmpeg_path,
        &settings.vision.ffprobe_path,
        settings.vision.frames_per_second,
    );

    let text: Arc<dyn MediaProcessor> = Arc::new(TextProcessor::new(
        Arc::new(CompositeTextExtractor::with_defaults()),
        Arc::clone(&artifacts),
    ));
    let audio: Arc<dyn MediaProcessor> =
        Arc::new(AudioProcessor::new(Arc::new(whisper), Arc::clone(&artifacts)));
    let image: Arc<dyn MediaProcessor> = Arc::new(ImageProcessor::new(
        Arc::clone(&detector),
        Arc::clone(&artifacts),
        settings.vision.threshold,
    ));
    let video: Arc<dyn MediaProcessor> = Arc::new(VideoProcessor::new(
        Arc::new(sampler),
        detector,
        artifacts,
        settings.vision.threshold,
    ));

    ProcessingService::new(vec![
        (Category::Text, text),
        (Category::Audio, audio),
        (Category::Image, image),
        (Category::Video, video),
    ])
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    let tracing_config = TracingConfig::new(
        environment.as_str(),
        settings.logging.json_format
            || environment.prefers_json_logs()
            || TracingConfig::default().json_format,
    );
    init_tracing(&tracing_config, settings.server.port);

    let processing_service = Arc::new(build_processing_service(&settings));
    let upload_store = Arc::new(LocalUploadStore::new(StorageNamer::new(
        &settings.storage.upload_root,
        settings.storage.directory_naming,
    )));
    let intake_service = Arc::new(IntakeService::new(upload_store, processing_service));

    let llm = &settings.llm;
    let llm_api_key = api_key_or_env(&llm.api_key);
    let qa_client: Arc<dyn LlmClient> = Arc::new(
        OpenAiChatClient::new(&llm.base_url, llm_api_key.clone(), llm.qa_model.clone())
            .with_max_tokens(llm.max_tokens)
            .with_temperature(llm.temperature),
    );
    let demo_client: Arc<dyn LlmClient> = Arc::new(OpenAiChatClient::new(
        &llm.base_url,
        llm_api_key,
        llm.demo_model.clone(),
    ));

    let query_log: Arc<dyn QueryLog> = Arc::new(CsvQueryLog::new(&settings.storage.query_log_path));
    let query_service = Arc::new(QueryService::new(qa_client, query_log));
    let demo_chat_service = Arc::new(DemoChatService::new(demo_client));

    let origin = HeaderValue::from_str(&settings.cors.allowed_origin)
        .context("invalid cors.allowed_origin")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;

    tracing::info!(
        upload_root = %settings.storage.upload_root,
        naming = ?settings.storage.directory_naming,
        allowed_origin = %settings.cors.allowed_origin,
        "Intake pipeline ready"
    );

    let state = AppState {
        intake_service,
        query_service,
        demo_chat_service,
        settings,
    };
    let router = create_router(state, origin);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
