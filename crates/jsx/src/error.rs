//! Error types for rendering
//!
//! Component failures pass through untouched: the boxed error a component
//! returned is the error the caller sees.

use markup::{BoxError, MarkupError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Component(BoxError),

    #[error(transparent)]
    Markup(#[from] MarkupError),
}

impl RenderError {
    /// The component's own error, if that is what failed
    pub fn component_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            RenderError::Component(err) => Some(err.as_ref()),
            RenderError::Markup(_) => None,
        }
    }
}
