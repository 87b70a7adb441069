//! Consistency Checker - Validates single switching per list.
//!
//! A sequence is consistent when, scanning from the first row to the last,
//! no row chooses Left after an earlier row chose Right; that is, the 0/1
//! encoding never decreases. All-Left and all-Right are consistent.

use serde::{Deserialize, Serialize};

use super::{AnswerError, AnswerSequence, ResponseSet};
use crate::domain::foundation::{Axis, Choice};

/// First row at which a sequence reverts from Right to Left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub list: usize,
    pub row: usize,
}

/// Per-axis consistency of one respondent.
///
/// An axis is consistent only if every one of its lists is consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsistencyResult {
    pub x: bool,
    pub y: bool,
    pub x_violation: Option<Violation>,
    pub y_violation: Option<Violation>,
}

impl ConsistencyResult {
    pub fn axis(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn violation(&self, axis: Axis) -> Option<Violation> {
        match axis {
            Axis::X => self.x_violation,
            Axis::Y => self.y_violation,
        }
    }

    pub fn both(&self) -> bool {
        self.x && self.y
    }
}

/// Consistency checks over answer sequences.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Index of the first row that chooses Left after a Right, if any.
    pub fn first_violation(sequence: &AnswerSequence) -> Option<usize> {
        sequence
            .choices()
            .windows(2)
            .position(|pair| pair[1].encoded() < pair[0].encoded())
            .map(|position| position + 1)
    }

    pub fn is_consistent(sequence: &AnswerSequence) -> bool {
        Self::first_violation(sequence).is_none()
    }

    /// Checks a raw row sequence that may still contain unanswered rows.
    ///
    /// # Errors
    /// `AnswerError::Incomplete` if any row is absent.
    pub fn check_rows(axis: Axis, rows: &[Option<Choice>]) -> Result<bool, AnswerError> {
        let sequence = AnswerSequence::from_partial(axis, rows)?;
        Ok(Self::is_consistent(&sequence))
    }

    /// First violation across all lists of one axis.
    pub fn check_axis(sequences: &[AnswerSequence]) -> Option<Violation> {
        sequences.iter().enumerate().find_map(|(list, sequence)| {
            Self::first_violation(sequence).map(|row| Violation { list, row })
        })
    }

    pub fn check(responses: &ResponseSet) -> ConsistencyResult {
        let x_violation = Self::check_axis(responses.sequences(Axis::X));
        let y_violation = Self::check_axis(responses.sequences(Axis::Y));

        ConsistencyResult {
            x: x_violation.is_none(),
            y: y_violation.is_none(),
            x_violation,
            y_violation,
        }
    }
}
