//! Template types and error definitions

use serde::Deserialize;
use thiserror::Error;

use super::scanner::ESCAPE;

/// Template-specific error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unterminated variable reference at byte {offset}")]
    Unterminated { offset: usize },

    #[error("Invalid delimiters: {0}")]
    InvalidDelimiters(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// The start/end token pair marking a variable reference, e.g. `${` and `}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    start: String,
    end: String,
}

impl Delimiters {
    /// Create a delimiter pair.
    ///
    /// Both tokens must be non-empty and neither may begin with the escape
    /// marker, otherwise an escaped delimiter would be indistinguishable from
    /// an escaped backslash.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> TemplateResult<Self> {
        let start = start.into();
        let end = end.into();

        for (label, token) in [("start", &start), ("end", &end)] {
            if token.is_empty() {
                return Err(TemplateError::InvalidDelimiters(format!(
                    "{} delimiter must not be empty",
                    label
                )));
            }
            if token.starts_with(ESCAPE) {
                return Err(TemplateError::InvalidDelimiters(format!(
                    "{} delimiter must not begin with {:?}",
                    label, ESCAPE
                )));
            }
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            start: "${".to_string(),
            end: "}".to_string(),
        }
    }
}

/// What the parser does with a `${...` reference still open at end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedPolicy {
    /// Discard the unterminated tail.
    #[default]
    Drop,
    /// Keep the tail, start delimiter included, as literal text.
    Literal,
    /// Fail the parse with [`TemplateError::Unterminated`].
    Reject,
}

/// Options controlling how template source is parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiters: Delimiters,
    pub unterminated: UnterminatedPolicy,
}

impl ParseOptions {
    pub fn new(delimiters: Delimiters, unterminated: UnterminatedPolicy) -> Self {
        Self {
            delimiters,
            unterminated,
        }
    }
}
