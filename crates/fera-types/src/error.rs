use thiserror::Error;

use crate::llm::LlmError;

/// Errors surfaced by the funnel session and its construction.
#[derive(Debug, Error)]
pub enum FunnelError {
    /// Missing or invalid configuration (credential, model, window, threshold).
    /// Fatal: prevents a session from being created.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The completion backend failed for this turn.
    #[error("backend error: {0}")]
    Backend(#[from] LlmError),

    /// Caller passed input the session refuses to process.
    #[error("invalid input: {0}")]
    Validation(String),
}

impl FunnelError {
    pub fn configuration(message: impl Into<String>) -> Self {
        FunnelError::Configuration(message.into())
    }

    /// Whether this failure is scoped to a single turn (the session stays usable).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FunnelError::Configuration(_))
    }
}
