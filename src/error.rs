//! Error types for tutorlog operations.

use thiserror::Error;

use crate::week::Week;

/// Errors that can occur in tutorlog operations.
///
/// All errors are local and synchronous: a failed operation is rejected and
/// leaves prior state intact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TutorLogError {
    #[error("Duration must be positive, got {0} minutes")]
    InvalidDuration(i64),

    #[error("Event already in log: {0}")]
    DuplicateEvent(String),

    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Week {0} is not an active week of this tutorial")]
    UnknownWeek(Week),

    #[error("No student named '{0}' in this tutorial")]
    UnknownStudent(String),

    #[error("No assignment named '{0}' in this tutorial")]
    UnknownAssignment(String),
}

/// Result type alias for tutorlog operations.
pub type TutorLogResult<T> = Result<T, TutorLogError>;
