use std::sync::Arc;

use crate::application::services::{DemoChatService, IntakeService, QueryService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub intake_service: Arc<IntakeService>,
    pub query_service: Arc<QueryService>,
    pub demo_chat_service: Arc<DemoChatService>,
    pub settings: Settings,
}
