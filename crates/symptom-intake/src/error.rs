//! Validation Error Types

use thiserror::Error;

/// Errors raised while collecting a symptom form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Free text longer than the intake accepts
    #[error("{field} is {len} characters long, maximum is {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl ValidationError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::TooLong { field, .. } => field,
        }
    }
}
