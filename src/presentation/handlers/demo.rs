use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::error_response;

pub const CHAT_HISTORY_HEADER: [&str; 4] = ["query", "response", "chunk1", "chunk2"];
pub const CHAT_HISTORY_FILENAME: &str = "chat_history.csv";

#[derive(Deserialize)]
struct DemoMessageRequest {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
pub struct DemoAnswerResponse {
    pub answer: String,
}

#[derive(Serialize)]
pub struct DemoMessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct DemoResetResponse {
    #[serde(rename = "Success")]
    pub success: String,
}

/// One paired exchange in the downloadable history.
pub type ChatHistoryRow = (String, String, Option<String>, Option<String>);

#[tracing::instrument(skip(state, body))]
pub async fn process_message_pdf_demo_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    let message = serde_json::from_slice::<DemoMessageRequest>(&body)
        .ok()
        .and_then(|request| request.message)
        .filter(|message| !message.trim().is_empty());

    let Some(message) = message else {
        return error_response(StatusCode::BAD_REQUEST, "Message is required");
    };

    tracing::debug!(message = %sanitize_prompt(&message), "Processing demo message");

    match state.demo_chat_service.answer(&message).await {
        Ok(answer) => (StatusCode::OK, Json(DemoAnswerResponse { answer })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Demo chat completion failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn ingest_pdf_demo_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(DemoMessageResponse {
            message: "Document processed successfully".to_string(),
        }),
    )
}

pub async fn reset_chat_demo_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(DemoResetResponse {
            success: "Success".to_string(),
        }),
    )
}

pub fn render_chat_history(rows: &[ChatHistoryRow]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CHAT_HISTORY_HEADER)?;
    for (query, response, chunk1, chunk2) in rows {
        writer.write_record([
            query.as_str(),
            response.as_str(),
            chunk1.as_deref().unwrap_or_default(),
            chunk2.as_deref().unwrap_or_default(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// The demo keeps no chat history, so the export is always the header row.
pub async fn download_chat_history_demo_handler() -> Response {
    match render_chat_history(&[]) {
        Ok(csv_body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename={}", CHAT_HISTORY_FILENAME),
                ),
            ],
            csv_body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render chat history");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
