//! Error types for markup operations
//!
//! Flat hierarchy. Rendering a resolved tree never fails; these only
//! surface for contract violations and bad input documents.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarkupError>;

/// Error type returned by component implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("Unresolved component in render tree: {0}")]
    UnresolvedComponent(String),

    #[error("Malformed node at {path}: {reason}")]
    MalformedNode { path: String, reason: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl MarkupError {
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        MarkupError::MalformedNode {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
