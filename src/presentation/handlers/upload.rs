use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::application::services::IntakeError;
use crate::domain::ProcessingOutcome;
use crate::presentation::state::AppState;

use super::error::error_response;

pub const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub processed_text: String,
}

#[derive(Serialize)]
pub struct UploadInfoResponse {
    pub message: String,
}

struct FilePart {
    filename: String,
    data: Bytes,
}

enum FilePartError {
    Missing,
    TooLarge,
}

/// Finds the first multipart part named `file` that carries a filename.
async fn read_file_part(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<FilePart, FilePartError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::warn!(error = %e, "Upload request is not multipart");
        FilePartError::Missing
    })?;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(FilePartError::Missing),
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::warn!(error = %e, "Upload exceeds size limit");
                return Err(FilePartError::TooLarge);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return Err(FilePartError::Missing);
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        return match field.bytes().await {
            Ok(data) => Ok(FilePart { filename, data }),
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => Err(FilePartError::TooLarge),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read file bytes");
                Err(FilePartError::Missing)
            }
        };
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_file_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let part = match read_file_part(multipart).await {
        Ok(part) => part,
        Err(FilePartError::Missing) => {
            return error_response(StatusCode::BAD_REQUEST, "No file part");
        }
        Err(FilePartError::TooLarge) => {
            return error_response(StatusCode::PAYLOAD_TOO_LARGE, "File too large");
        }
    };

    tracing::debug!(filename = %part.filename, bytes = part.data.len(), "File data received");

    let report = match state.intake_service.intake(&part.filename, part.data).await {
        Ok(report) => report,
        Err(e @ (IntakeError::NoSelectedFile | IntakeError::UnsupportedFileType(_))) => {
            tracing::warn!(filename = %part.filename, error = %e, "Upload rejected");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
        Err(IntakeError::Storage(e)) => {
            tracing::error!(error = %e, "Error during file upload");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    match report.outcome {
        ProcessingOutcome::Success { message } => {
            tracing::info!(path = %report.stored, "File uploaded and processed");
            (
                StatusCode::OK,
                Json(UploadResponse {
                    message: "File uploaded and processed".to_string(),
                    processed_text: message,
                }),
            )
                .into_response()
        }
        ProcessingOutcome::Failure { reason } => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, reason)
        }
    }
}

pub async fn upload_info_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(UploadInfoResponse {
            message: "Upload endpoint".to_string(),
        }),
    )
}
