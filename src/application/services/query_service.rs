use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, QueryLog, QueryLogError};
use crate::domain::QueryLogEntry;

/// Answers a free-text query and records the exchange in the query log.
pub struct QueryService {
    generator: Arc<dyn LlmClient>,
    query_log: Arc<dyn QueryLog>,
}

impl QueryService {
    pub fn new(generator: Arc<dyn LlmClient>, query_log: Arc<dyn QueryLog>) -> Self {
        Self {
            generator,
            query_log,
        }
    }

    pub async fn answer(&self, query: &str) -> Result<String, QueryError> {
        let response = self.generator.complete(query).await?;

        self.query_log
            .append(&QueryLogEntry::new(query, response.clone()))
            .await?;

        Ok(response)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Generation(#[from] LlmClientError),
    #[error("failed to log query: {0}")]
    Log(#[from] QueryLogError),
}
