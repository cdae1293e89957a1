//! Tool error types

use thiserror::Error;

/// Boxed error used where a failure's concrete type is opaque
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure raised while a tool runs
#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments did not match the tool's option schema
    #[error("invalid options for '{tool}': {message}")]
    OptionParse { tool: String, message: String },

    /// Writing to the console failed
    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The tool reported a failure
    #[error("{0}")]
    Failed(String),

    /// Any other error raised by tool logic
    #[error(transparent)]
    Other(BoxError),
}

impl ToolError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn other(error: impl Into<BoxError>) -> Self {
        Self::Other(error.into())
    }

    pub fn is_option_parse(&self) -> bool {
        matches!(self, Self::OptionParse { .. })
    }
}

/// A registered tool type could not be instantiated
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot construct {type_id}: {reason}")]
pub struct ConstructionError {
    pub type_id: String,
    pub reason: String,
}

impl ConstructionError {
    pub fn new(type_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            reason: reason.into(),
        }
    }
}
