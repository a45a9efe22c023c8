//! Error types for the format logic crate

use thiserror::Error;

/// Main error type for the format logic crate.
///
/// Evaluation itself is infallible; errors only arise when a forest is built
/// from a declarative description and a name cannot be resolved.
#[derive(Error, Debug)]
pub enum FormatLogicError {
    #[error("Unknown predicate binding: {0}")]
    UnknownPredicate(String),

    #[error("Unknown observer binding: {0}")]
    UnknownObserver(String),

    #[error("Duplicate binding: {0}")]
    DuplicateBinding(String),

    #[error("Invalid forest description: {0}")]
    InvalidDescription(#[from] serde_json::Error),
}

/// Result type alias for the format logic crate
pub type Result<T> = std::result::Result<T, FormatLogicError>;
