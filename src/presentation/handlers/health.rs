use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn welcome_handler() -> impl IntoResponse {
    tracing::debug!("Welcome endpoint accessed");
    (StatusCode::OK, "Welcome to the Backend!")
}

pub async fn health_handler() -> impl IntoResponse {
    tracing::debug!("Health check endpoint accessed");
    (StatusCode::OK, "Healthy")
}

/// Unmapped routes answer 200 with a plain-text notice rather than 404.
pub async fn fallback_handler() -> impl IntoResponse {
    tracing::debug!("Invalid route accessed");
    (StatusCode::OK, "Sorry, Invalid Route!")
}
