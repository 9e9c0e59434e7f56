use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use anote_intake::application::ports::{LlmClient, LlmClientError};
use anote_intake::infrastructure::llm::OpenAiChatClient;

use crate::helpers::start_mock_server;

async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let content = format!(
        "{}|{}|{}|{}|{}",
        auth,
        body["model"].as_str().unwrap_or_default(),
        body["messages"][0]["role"].as_str().unwrap_or_default(),
        body["messages"][0]["content"].as_str().unwrap_or_default(),
        body["max_tokens"]
    );
    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
}

#[tokio::test]
async fn given_successful_completion_when_completing_then_returns_first_choice() {
    let app = Router::new().route("/v1/chat/completions", post(echo_completion));
    let (base_url, _shutdown) = start_mock_server(app).await;
    let client = OpenAiChatClient::new(&format!("{}/v1/", base_url), "sk-test", "gpt-4o-mini")
        .with_max_tokens(100)
        .with_temperature(0.0);

    let answer = client.complete("hello there").await.unwrap();

    assert_eq!(answer, "Bearer sk-test|gpt-4o-mini|user|hello there|100");
    assert_eq!(client.model(), "gpt-4o-mini");
}

#[tokio::test]
async fn given_no_max_tokens_when_completing_then_field_is_omitted() {
    let app = Router::new().route("/chat/completions", post(echo_completion));
    let (base_url, _shutdown) = start_mock_server(app).await;
    let client = OpenAiChatClient::new(&base_url, "k", "gpt-4");

    let answer = client.complete("q").await.unwrap();

    assert!(answer.ends_with("|null"));
}

#[tokio::test]
async fn given_rate_limit_when_completing_then_returns_rate_limited() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let (base_url, _shutdown) = start_mock_server(app).await;
    let client = OpenAiChatClient::new(&base_url, "k", "gpt-4");

    let result = client.complete("q").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_api_failure_without_body() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal secret detail") }),
    );
    let (base_url, _shutdown) = start_mock_server(app).await;
    let client = OpenAiChatClient::new(&base_url, "k", "gpt-4");

    let result = client.complete("q").await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.contains("500"));
            assert!(!message.contains("secret"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let (base_url, _shutdown) = start_mock_server(app).await;
    let client = OpenAiChatClient::new(&base_url, "k", "gpt-4");

    let result = client.complete("q").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}
