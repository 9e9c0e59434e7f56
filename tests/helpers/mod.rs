use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::http::HeaderValue;

use anote_intake::application::ports::{
    ArtifactStore, DetectionError, FrameSampler, FrameSamplerError, LlmClient, LlmClientError,
    MediaProcessor, ObjectDetector, ProcessorError, SampledFrame, TranscriptionEngine,
    TranscriptionError,
};
use anote_intake::application::processors::{
    AudioProcessor, ImageProcessor, TextProcessor, VideoProcessor,
};
use anote_intake::application::services::{
    DemoChatService, IntakeService, ProcessingService, QueryService,
};
use anote_intake::domain::{Category, Detection};
use anote_intake::infrastructure::storage::{
    ArtifactDir, CsvQueryLog, DirectoryNaming, LocalUploadStore, StorageNamer,
};
use anote_intake::infrastructure::text_processing::CompositeTextExtractor;
use anote_intake::presentation::{AppState, Settings, create_router};

pub const TEST_ORIGIN: &str = "http://localhost:3000";
pub const BOUNDARY: &str = "intake-test-boundary";

pub struct EchoLlmClient;

#[async_trait]
impl LlmClient for EchoLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        Ok(format!("Answer to: {}", prompt))
    }
}

pub struct FailingLlmClient;

#[async_trait]
impl LlmClient for FailingLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Err(LlmClientError::ApiRequestFailed("model offline".to_string()))
    }
}

pub struct FakeTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for FakeTranscriptionEngine {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String, TranscriptionError> {
        Ok("hello from the recording".to_string())
    }
}

pub struct FailingTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for FailingTranscriptionEngine {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::ApiRequestFailed("status 503".to_string()))
    }
}

/// Returns the same detections for every image it is shown.
pub struct FixedDetector(pub Vec<Detection>);

#[async_trait]
impl ObjectDetector for FixedDetector {
    async fn detect(&self, _image: &[u8]) -> Result<Vec<Detection>, DetectionError> {
        Ok(self.0.clone())
    }
}

/// Answers with detections keyed by the first byte of the image, so frames
/// can be told apart.
pub struct ByteKeyedDetector;

#[async_trait]
impl ObjectDetector for ByteKeyedDetector {
    async fn detect(&self, image: &[u8]) -> Result<Vec<Detection>, DetectionError> {
        match image.first() {
            Some(b'p') => Ok(vec![
                Detection::new("person", 0.91),
                Detection::new("dog", 0.42),
            ]),
            Some(b'c') => Ok(vec![Detection::new("car", 0.77), Detection::new("bus", 0.6)]),
            _ => Ok(vec![Detection::new("kite", 0.1)]),
        }
    }
}

pub struct FixedFrameSampler(pub Vec<SampledFrame>);

#[async_trait]
impl FrameSampler for FixedFrameSampler {
    async fn sample(&self, _video_path: &Path) -> Result<Vec<SampledFrame>, FrameSamplerError> {
        Ok(self.0.clone())
    }
}

pub fn frame(index: u64, first_byte: u8) -> SampledFrame {
    SampledFrame {
        index,
        image: vec![first_byte, 0, 0],
    }
}

/// Counts calls and answers with a fixed message.
pub struct CountingProcessor {
    pub calls: AtomicUsize,
    pub reply: Result<String, String>,
}

impl CountingProcessor {
    pub fn ok(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply: Ok(message.to_string()),
        }
    }

    pub fn missing_file() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply: Err("gone".to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaProcessor for CountingProcessor {
    async fn process(&self, _path: &Path) -> Result<String, ProcessorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(message) => Ok(message.clone()),
            Err(path) => Err(ProcessorError::MissingFile(path.clone())),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub root: tempfile::TempDir,
}

impl TestApp {
    pub fn upload_root(&self) -> PathBuf {
        self.root.path().join("uploads")
    }

    pub fn artifacts_root(&self) -> PathBuf {
        self.root.path().join("artifacts")
    }

    pub fn query_log_path(&self) -> PathBuf {
        self.root.path().join("output_document").join("chat_history.csv")
    }
}

pub fn processing_service(artifacts: Arc<dyn ArtifactStore>) -> ProcessingService {
    let detector: Arc<dyn ObjectDetector> = Arc::new(ByteKeyedDetector);

    let text: Arc<dyn MediaProcessor> = Arc::new(TextProcessor::new(
        Arc::new(CompositeTextExtractor::with_defaults()),
        Arc::clone(&artifacts),
    ));
    let audio: Arc<dyn MediaProcessor> = Arc::new(AudioProcessor::new(
        Arc::new(FakeTranscriptionEngine),
        Arc::clone(&artifacts),
    ));
    let image: Arc<dyn MediaProcessor> = Arc::new(ImageProcessor::new(
        Arc::clone(&detector),
        Arc::clone(&artifacts),
        0.5,
    ));
    let video: Arc<dyn MediaProcessor> = Arc::new(VideoProcessor::new(
        Arc::new(FixedFrameSampler(vec![frame(0, b'p'), frame(30, b'x')])),
        detector,
        artifacts,
        0.5,
    ));

    ProcessingService::new(vec![
        (Category::Text, text),
        (Category::Audio, audio),
        (Category::Image, image),
        (Category::Video, video),
    ])
}

pub fn create_test_app_with(llm: Arc<dyn LlmClient>, settings: Settings) -> TestApp {
    let root = tempfile::TempDir::new().unwrap();
    let upload_root = root.path().join("uploads");
    let artifacts_root = root.path().join("artifacts");
    let query_log_path = root.path().join("output_document").join("chat_history.csv");

    let artifacts: Arc<dyn ArtifactStore> = Arc::new(ArtifactDir::new(artifacts_root));
    let processing = Arc::new(processing_service(artifacts));
    let store = Arc::new(LocalUploadStore::new(StorageNamer::new(
        upload_root,
        DirectoryNaming::Unique,
    )));

    let state = AppState {
        intake_service: Arc::new(IntakeService::new(store, processing)),
        query_service: Arc::new(QueryService::new(
            Arc::clone(&llm),
            Arc::new(CsvQueryLog::new(query_log_path)),
        )),
        demo_chat_service: Arc::new(DemoChatService::new(llm)),
        settings,
    };

    let router = create_router(state, HeaderValue::from_static(TEST_ORIGIN));
    TestApp { router, root }
}

pub fn create_test_app_with_llm(llm: Arc<dyn LlmClient>) -> TestApp {
    create_test_app_with(llm, Settings::default())
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_llm(Arc::new(EchoLlmClient))
}

pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_text_field(field: &str, value: &str) -> Vec<u8> {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{f}\"\r\n\r\n{v}\r\n--{b}--\r\n",
        b = BOUNDARY,
        f = field,
        v = value
    )
    .into_bytes()
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Builds a minimal PDF with one page per content stream, Helvetica as `/F1`.
pub fn build_pdf(page_streams: &[&str]) -> Vec<u8> {
    let page_count = page_streams.len();
    let font_id = 3 + 2 * page_count;
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
            (0..page_count)
                .map(|i| format!("{} 0 R", 3 + 2 * i))
                .collect::<Vec<_>>()
                .join(" ")
        ),
    ];
    for (i, stream) in page_streams.iter().enumerate() {
        let content_id = 4 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 {font_id} 0 R >> >> /Contents {content_id} 0 R >>"
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }
    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}

pub fn pdf_text_stream(text: &str) -> String {
    format!("BT /F1 12 Tf 72 712 Td ({text}) Tj ET")
}

/// Serves `app` on an ephemeral local port until the sender is dropped or
/// fired. Returns the `http://127.0.0.1:<port>` base URL.
pub async fn start_mock_server(app: Router) -> (String, tokio::sync::oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}
