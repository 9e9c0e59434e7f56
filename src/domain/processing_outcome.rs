#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Success { message: String },
    Failure { reason: String },
}

impl ProcessingOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
