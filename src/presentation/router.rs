use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    download_chat_history_demo_handler, fallback_handler, health_handler,
    ingest_pdf_demo_handler, process_message_pdf_demo_handler, query_handler,
    reset_chat_demo_handler, upload_file_handler, upload_info_handler, welcome_handler,
};
use crate::presentation::state::AppState;

/// Builds the service. `allowed_origin` is the single frontend origin echoed
/// on every response, with credentials allowed.
pub fn create_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let max_upload_bytes = state.settings.server.max_upload_bytes;

    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/welcome", get(welcome_handler))
        .route("/health", get(health_handler))
        .route(
            "/upload/upload-file",
            post(upload_file_handler).get(upload_info_handler),
        )
        .route("/query/query-task", post(query_handler))
        .route(
            "/process-message-pdf-demo",
            post(process_message_pdf_demo_handler).get(process_message_pdf_demo_handler),
        )
        .route(
            "/ingest-pdf-demo",
            post(ingest_pdf_demo_handler).get(ingest_pdf_demo_handler),
        )
        .route(
            "/reset-chat-demo",
            post(reset_chat_demo_handler).get(reset_chat_demo_handler),
        )
        .route(
            "/download-chat-history-demo",
            post(download_chat_history_demo_handler).get(download_chat_history_demo_handler),
        )
        .fallback(fallback_handler)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
