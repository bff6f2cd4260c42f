use thiserror::Error;

use crate::client::PromptError;

/// Failure of a single render. Aborts the whole invocation batch.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Prompt cancelled by user")]
    PromptCancelled,

    #[error("Invalid color argument {argument:?}: {reason}")]
    InvalidColor { argument: String, reason: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

impl RenderError {
    /// True for the expected, user-initiated outcome
    pub fn is_cancellation(&self) -> bool {
        matches!(self, RenderError::PromptCancelled)
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
