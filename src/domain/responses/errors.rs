//! Answer collection errors.

use thiserror::Error;

use crate::domain::foundation::{Axis, DomainError, ErrorCode, RowLabel};

/// Errors raised while turning collected answers into answer sequences.
///
/// These indicate a contract violation by the input layer; they are never
/// used to represent an undefined result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("Unanswered rows: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error("Row {label} does not exist in list {} (rows per list: {rows})", .list + 1)]
    UnknownRow {
        list: usize,
        label: RowLabel,
        rows: usize,
    },

    #[error("List {} does not exist (lists: {lists})", .list + 1)]
    ListOutOfRange { list: usize, lists: usize },

    #[error("{axis} has {actual} answer sequences, expected {expected}")]
    ListCountMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    #[error("{axis} list {} has {actual} answers, expected {expected}", .list + 1)]
    LengthMismatch {
        axis: Axis,
        list: usize,
        expected: usize,
        actual: usize,
    },
}

impl AnswerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnswerError::Incomplete { .. } => ErrorCode::IncompleteAnswers,
            AnswerError::UnknownRow { .. } => ErrorCode::UnknownRow,
            AnswerError::ListOutOfRange { .. } => ErrorCode::OutOfRange,
            AnswerError::ListCountMismatch { .. } | AnswerError::LengthMismatch { .. } => {
                ErrorCode::ValidationFailed
            }
        }
    }
}

impl From<AnswerError> for DomainError {
    fn from(err: AnswerError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match &err {
            AnswerError::Incomplete { missing } => {
                domain.with_detail("unanswered", missing.len().to_string())
            }
            _ => domain,
        }
    }
}
