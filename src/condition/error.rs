//! Condition analysis error types.

use thiserror::Error;

/// Errors raised around the classifier.
///
/// Classification itself is total; these come from input validation and
/// calendar range handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionError {
    /// A workout record failed validation.
    #[error("Invalid workout: {0}")]
    InvalidWorkout(String),

    /// An athlete profile failed validation.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// A calendar range could not be built.
    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

/// Result type for condition operations.
pub type ConditionResult<T> = Result<T, ConditionError>;
