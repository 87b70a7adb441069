//! Payment selection - which list and row of a respondent's answers is paid.
//!
//! The list is drawn uniformly from `1..=m`; the row is drawn uniformly
//! among all `2n` rows of that list, x rows first, then y rows.

use serde::{Deserialize, Serialize};

use super::{PairPosition, PaymentError};
use crate::domain::foundation::{Choice, RowLabel};
use crate::domain::instrument::DecisionLists;
use crate::domain::responses::ResponseSet;
use crate::ports::RandomSource;

/// The row drawn for payment and the decision the respondent made on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentSelection {
    pub list_index: usize,
    pub row: RowLabel,
    pub decision: Choice,
}

impl PaymentSelection {
    pub fn new(list_index: usize, row: RowLabel, decision: Choice) -> Self {
        Self {
            list_index,
            row,
            decision,
        }
    }

    /// Looks up the respondent's decision on a given row.
    pub fn for_row(
        lists: &DecisionLists,
        responses: &ResponseSet,
        list_index: usize,
        row: RowLabel,
    ) -> Result<Self, PaymentError> {
        if list_index >= lists.list_count() {
            return Err(PaymentError::ListOutOfRange {
                list: list_index,
                lists: lists.list_count(),
            });
        }
        if lists.row(list_index, row).is_none() {
            return Err(PaymentError::RowOutOfRange {
                list: list_index,
                label: row,
            });
        }
        let decision = responses
            .choice(list_index, row)
            .ok_or(PaymentError::Unanswered {
                list: list_index,
                label: row,
            })?;

        Ok(Self::new(list_index, row, decision))
    }

    /// Draws the paid list and row, then reads the decision made on it.
    pub fn draw(
        lists: &DecisionLists,
        responses: &ResponseSet,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, PaymentError> {
        let list_count = lists.list_count();
        if list_count == 0 {
            return Err(PaymentError::ListOutOfRange { list: 0, lists: 0 });
        }
        let list_index = rng.uniform_inclusive(1, list_count) - 1;

        let rows = lists.payment_rows(list_index);
        if rows.is_empty() {
            return Err(PaymentError::RowOutOfRange {
                list: list_index,
                label: RowLabel::x(0),
            });
        }
        let drawn = rng.uniform_inclusive(0, rows.len() - 1);
        let label = rows
            .get(drawn)
            .map(|row| row.label)
            .ok_or(PaymentError::RowOutOfRange {
                list: list_index,
                label: RowLabel::x(drawn),
            })?;

        Self::for_row(lists, responses, list_index, label)
    }
}

/// Draws the binding respondent 50/50.
pub fn draw_binding_position(rng: &mut dyn RandomSource) -> PairPosition {
    if rng.coin_flip() {
        PairPosition::Second
    } else {
        PairPosition::First
    }
}
