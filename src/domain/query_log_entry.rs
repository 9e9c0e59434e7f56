#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLogEntry {
    pub query: String,
    pub response: String,
}

impl QueryLogEntry {
    pub const HEADER: [&'static str; 2] = ["query", "response"];

    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
        }
    }

    pub fn as_record(&self) -> [&str; 2] {
        [&self.query, &self.response]
    }
}
