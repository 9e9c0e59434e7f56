use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Pulls a non-empty `query` string out of a JSON body. Any other shape,
/// including an empty body, yields `None`.
pub fn parse_query(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<QueryRequest>(body)
        .ok()
        .and_then(|request| request.query)
        .filter(|query| !query.is_empty())
}

#[tracing::instrument(skip(state, body))]
pub async fn query_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(query) = parse_query(&body) else {
        return error_response(StatusCode::BAD_REQUEST, "Query is required");
    };

    tracing::debug!(query = %sanitize_prompt(&query), "Processing query");

    match state.query_service.answer(&query).await {
        Ok(response) => {
            tracing::info!(chars = response.len(), "Query answered");
            (StatusCode::OK, Json(QueryResponse { response })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Query failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
