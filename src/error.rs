use thiserror::Error;

use crate::model::StudentId;

/// Rejections from mutating registry calls. A rejected call leaves the
/// registry untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("no student with id {0}")]
    UnknownStudent(StudentId),

    /// Negative or NaN.
    #[error("score must be a non-negative number (got {0})")]
    InvalidScore(f64),
}

impl RegistryError {
    /// IPC error code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::UnknownStudent(_) => "not_found",
            RegistryError::InvalidScore(_) => "bad_params",
        }
    }
}
