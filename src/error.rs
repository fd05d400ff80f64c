use crate::model::StudentId;
use thiserror::Error;

/// Reasons for refusing a score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    #[error("score for {subject} must be a number, got {input:?}")]
    NotNumeric { subject: String, input: String },

    #[error("score for {subject} must be between 0 and 100, got {score}")]
    OutOfRange { subject: String, score: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("a student with id {0} is already registered")]
    DuplicateId(StudentId),
}
