//! Error types for classification parsing.

/// Errors that can occur when turning text into a [`Classification`](crate::Classification).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    /// The name is not one of the known classification levels.
    #[error("unrecognized classification: {0}")]
    Unrecognized(String),

    /// A structured document held a non-string value where a classification was expected.
    #[error("classification must be a string: {0}")]
    NotAString(String),
}

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, ClassificationError>;
