mod demo_chat_service;
mod intake_service;
mod processing_service;
mod query_service;

pub use demo_chat_service::DemoChatService;
pub use intake_service::{IntakeError, IntakeReport, IntakeService};
pub use processing_service::{ProcessingService, UNSUPPORTED_FILE_TYPE};
pub use query_service::{QueryError, QueryService};
