//! Error types for classification.

use thiserror::Error;

/// Errors that can occur while building classifiers or encoding results.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// A keyword table could not be compiled into a pattern set.
    #[error("Invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;
