use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};

const NO_SOURCES: &str = " ";

/// Single-turn factual chatbot used by the PDF demo page. No retrieval is
/// wired in, so the sources section is always blank.
pub struct DemoChatService {
    client: Arc<dyn LlmClient>,
}

impl DemoChatService {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn build_prompt(message: &str) -> String {
        format!(
            "You are a factual chatbot that answers questions about uploaded documents. \
             You only answer with answers you find in the text, no outside information. \
             These are the sources from the text:{} And this is the question:{}.",
            NO_SOURCES,
            message.trim()
        )
    }

    pub async fn answer(&self, message: &str) -> Result<String, LlmClientError> {
        let prompt = Self::build_prompt(message);
        self.client.complete(&prompt).await
    }
}
