//! Payment resolution errors.

use thiserror::Error;

use super::PairPosition;
use crate::domain::foundation::{DomainError, ErrorCode, RowLabel};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("No payment selection for {position}")]
    MissingSelection { position: PairPosition },

    #[error("Uncertain roles require a binding respondent to be drawn")]
    MissingBindingDraw,

    #[error("List {} does not exist (lists: {lists})", .list + 1)]
    ListOutOfRange { list: usize, lists: usize },

    #[error("Row {label} does not exist in list {}", .list + 1)]
    RowOutOfRange { list: usize, label: RowLabel },

    #[error("Row {label} of list {} was never answered", .list + 1)]
    Unanswered { list: usize, label: RowLabel },
}

impl PaymentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentError::MissingSelection { .. } => ErrorCode::MissingSelection,
            PaymentError::MissingBindingDraw => ErrorCode::MissingBindingDraw,
            PaymentError::ListOutOfRange { .. } => ErrorCode::OutOfRange,
            PaymentError::RowOutOfRange { .. } => ErrorCode::UnknownRow,
            PaymentError::Unanswered { .. } => ErrorCode::IncompleteAnswers,
        }
    }
}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
