//! Error types for target parsing and decoding.

/// Errors that can occur when turning text into a [`Target`](crate::Target).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    /// The name is not one of the supported target triples.
    #[error("unknown or unsupported target: {0}")]
    Unknown(String),

    /// A structured document held a non-string value where a target was expected.
    #[error("target must be a string: {0}")]
    NotAString(String),
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
