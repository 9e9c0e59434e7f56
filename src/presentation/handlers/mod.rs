mod demo;
mod error;
mod health;
mod query;
mod upload;

pub use demo::{
    CHAT_HISTORY_HEADER, ChatHistoryRow, download_chat_history_demo_handler, ingest_pdf_demo_handler,
    process_message_pdf_demo_handler, render_chat_history, reset_chat_demo_handler,
};
pub use error::{ErrorResponse, error_response};
pub use health::{fallback_handler, health_handler, welcome_handler};
pub use query::{parse_query, query_handler};
pub use upload::{upload_file_handler, upload_info_handler};
