//! Answer collection: the per-respondent answer sheet and its finalized form.
//!
//! The input layer records one choice per row label as answers arrive. Once
//! every row of every list is answered, [`AnswerSheet::finalize`] produces an
//! immutable [`ResponseSet`] that every downstream computation takes by
//! reference. A revision is just another `record` followed by a new
//! `finalize`.

use serde::Serialize;
use std::collections::BTreeMap;

use super::AnswerError;
use crate::domain::foundation::{Axis, Choice, RowLabel};
use crate::domain::instrument::DecisionLists;

/// The complete, ordered choices of one respondent on one list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnswerSequence(Vec<Choice>);

impl AnswerSequence {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self(choices)
    }

    /// Builds a sequence from possibly-unanswered rows.
    ///
    /// Fails loudly when any row is absent; an absent row is never read as a choice.
    pub fn from_partial(axis: Axis, choices: &[Option<Choice>]) -> Result<Self, AnswerError> {
        let missing: Vec<String> = choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| choice.is_none())
            .map(|(index, _)| RowLabel::new(axis, index).to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AnswerError::Incomplete { missing });
        }

        Ok(Self(choices.iter().flatten().copied().collect()))
    }

    /// Decodes a 0 (Left) / 1 (Right) sequence.
    pub fn from_encoded(encoded: &[u8]) -> Option<Self> {
        encoded
            .iter()
            .map(|v| Choice::try_from_encoded(*v).ok())
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    pub fn choices(&self) -> &[Choice] {
        &self.0
    }

    pub fn encoded(&self) -> Vec<u8> {
        self.0.iter().map(Choice::encoded).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn left_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_left()).count()
    }

    pub fn right_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_right()).count()
    }

    pub fn get(&self, row: usize) -> Option<Choice> {
        self.0.get(row).copied()
    }
}

/// Finalized answers of one respondent: one sequence per list and axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseSet {
    x: Vec<AnswerSequence>,
    y: Vec<AnswerSequence>,
}

impl ResponseSet {
    /// Validates the shape of the sequences against the generated lists.
    pub fn new(
        lists: &DecisionLists,
        x: Vec<AnswerSequence>,
        y: Vec<AnswerSequence>,
    ) -> Result<Self, AnswerError> {
        let expected_lists = lists.list_count();
        let expected_rows = lists.rows_per_list();

        for (axis, sequences) in [(Axis::X, &x), (Axis::Y, &y)] {
            if sequences.len() != expected_lists {
                return Err(AnswerError::ListCountMismatch {
                    axis,
                    expected: expected_lists,
                    actual: sequences.len(),
                });
            }
            for (list, sequence) in sequences.iter().enumerate() {
                if sequence.len() != expected_rows {
                    return Err(AnswerError::LengthMismatch {
                        axis,
                        list,
                        expected: expected_rows,
                        actual: sequence.len(),
                    });
                }
            }
        }

        Ok(Self { x, y })
    }

    /// Convenience constructor for single-list configurations.
    pub fn single(
        lists: &DecisionLists,
        x: AnswerSequence,
        y: AnswerSequence,
    ) -> Result<Self, AnswerError> {
        Self::new(lists, vec![x], vec![y])
    }

    pub fn sequences(&self, axis: Axis) -> &[AnswerSequence] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn sequence(&self, axis: Axis, list: usize) -> Option<&AnswerSequence> {
        self.sequences(axis).get(list)
    }

    /// The choice made on `label` in list `list`.
    pub fn choice(&self, list: usize, label: RowLabel) -> Option<Choice> {
        self.sequence(label.axis, list)
            .and_then(|seq| seq.get(label.index))
    }
}

/// Mutable collection of one respondent's answers, keyed by list and row label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    list_count: usize,
    rows_per_list: usize,
    answers: BTreeMap<(usize, RowLabel), Choice>,
}

impl AnswerSheet {
    /// Creates an empty sheet shaped after the generated lists.
    pub fn for_lists(lists: &DecisionLists) -> Self {
        Self {
            list_count: lists.list_count(),
            rows_per_list: lists.rows_per_list(),
            answers: BTreeMap::new(),
        }
    }

    /// Records (or revises) the choice on one row. Returns the previous choice.
    pub fn record(
        &mut self,
        list: usize,
        label: RowLabel,
        choice: Choice,
    ) -> Result<Option<Choice>, AnswerError> {
        if list >= self.list_count {
            return Err(AnswerError::ListOutOfRange {
                list,
                lists: self.list_count,
            });
        }
        if label.index >= self.rows_per_list {
            return Err(AnswerError::UnknownRow {
                list,
                label,
                rows: self.rows_per_list,
            });
        }
        Ok(self.answers.insert((list, label), choice))
    }

    /// Records a whole list of one axis in row order.
    pub fn record_sequence(
        &mut self,
        list: usize,
        axis: Axis,
        choices: &[Choice],
    ) -> Result<(), AnswerError> {
        for (index, choice) in choices.iter().enumerate() {
            self.record(list, RowLabel::new(axis, index), *choice)?;
        }
        Ok(())
    }

    pub fn get(&self, list: usize, label: RowLabel) -> Option<Choice> {
        self.answers.get(&(list, label)).copied()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Total number of rows the respondent must answer (`2 · n · m`).
    pub fn required(&self) -> usize {
        2 * self.rows_per_list * self.list_count
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == self.required()
    }

    /// Every unanswered (list, row) pair in canonical order.
    pub fn missing(&self) -> Vec<(usize, RowLabel)> {
        (0..self.list_count)
            .flat_map(|list| {
                Axis::ALL.into_iter().flat_map(move |axis| {
                    (0..self.rows_per_list).map(move |index| (list, RowLabel::new(axis, index)))
                })
            })
            .filter(|key| !self.answers.contains_key(key))
            .collect()
    }

    /// Produces the immutable response set, failing if any row is unanswered.
    pub fn finalize(&self) -> Result<ResponseSet, AnswerError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(AnswerError::Incomplete {
                missing: missing
                    .iter()
                    .map(|(list, label)| format!("list {} {}", list + 1, label))
                    .collect(),
            });
        }

        let collect_axis = |axis: Axis| -> Vec<AnswerSequence> {
            (0..self.list_count)
                .map(|list| {
                    AnswerSequence::new(
                        (0..self.rows_per_list)
                            .filter_map(|index| self.get(list, RowLabel::new(axis, index)))
                            .collect(),
                    )
                })
                .collect()
        };

        Ok(ResponseSet {
            x: collect_axis(Axis::X),
            y: collect_axis(Axis::Y),
        })
    }
}
