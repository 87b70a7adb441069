//! Decision rows and lists produced by the list generator.

use serde::Serialize;

use super::Configuration;
use crate::domain::foundation::{Axis, Choice, RowLabel};

/// A (own, counterpart) payoff pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allocation {
    pub own: f64,
    pub other: f64,
}

impl Allocation {
    pub fn new(own: f64, other: f64) -> Self {
        Self { own, other }
    }
}

/// One binary decision: the varied Left allocation against the `(e, e)` anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionRow {
    pub label: RowLabel,
    pub left: Allocation,
    pub right: Allocation,
}

impl DecisionRow {
    /// The allocation implemented when `choice` is taken on this row.
    pub fn allocation(&self, choice: Choice) -> Allocation {
        match choice {
            Choice::Left => self.left,
            Choice::Right => self.right,
        }
    }
}

/// The `n` rows of one list on one axis, in ascending order of own Left payoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionList {
    pub axis: Axis,
    pub list_index: usize,
    pub gap: f64,
    rows: Vec<DecisionRow>,
}

impl DecisionList {
    pub(crate) fn new(axis: Axis, list_index: usize, gap: f64, rows: Vec<DecisionRow>) -> Self {
        Self {
            axis,
            list_index,
            gap,
            rows,
        }
    }

    pub fn rows(&self) -> &[DecisionRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&DecisionRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Own payoffs under Left (`mp_x[k]` / `mp_y[k]`).
    pub fn own_payoffs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.left.own).collect()
    }

    /// Counterpart payoffs under Left (`op_x[k]` / `op_y[k]`).
    pub fn counterpart_payoffs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.left.other).collect()
    }

    /// The anchor payoffs under Right (`e_xy[k]`).
    pub fn anchor_payoffs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.right.own).collect()
    }
}

/// All decision lists of a configuration, shared read-only by every respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionLists {
    config: Configuration,
    x_lists: Vec<DecisionList>,
    y_lists: Vec<DecisionList>,
}

impl DecisionLists {
    pub(crate) fn new(
        config: Configuration,
        x_lists: Vec<DecisionList>,
        y_lists: Vec<DecisionList>,
    ) -> Self {
        Self {
            config,
            x_lists,
            y_lists,
        }
    }

    /// The configuration the lists were generated from.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn equal_payoff(&self) -> f64 {
        self.config.equal_payoff()
    }

    /// Number of lists per axis `m`.
    pub fn list_count(&self) -> usize {
        self.x_lists.len()
    }

    /// Rows per list `n`.
    pub fn rows_per_list(&self) -> usize {
        self.config.rows_per_list()
    }

    pub fn lists(&self, axis: Axis) -> &[DecisionList] {
        match axis {
            Axis::X => &self.x_lists,
            Axis::Y => &self.y_lists,
        }
    }

    pub fn list(&self, axis: Axis, list_index: usize) -> Option<&DecisionList> {
        self.lists(axis).get(list_index)
    }

    /// Looks up a row of list `list_index` by its label.
    pub fn row(&self, list_index: usize, label: RowLabel) -> Option<&DecisionRow> {
        self.list(label.axis, list_index)
            .and_then(|list| list.row(label.index))
    }

    /// Own Left payoff at `row` of the given list, e.g. `mp_x[k][j]`.
    pub fn own_payoff(&self, axis: Axis, list_index: usize, row: usize) -> Option<f64> {
        self.list(axis, list_index)
            .and_then(|list| list.row(row))
            .map(|r| r.left.own)
    }

    /// Every row eligible for payment in list `list_index`: x rows then y rows.
    pub fn payment_rows(&self, list_index: usize) -> Vec<&DecisionRow> {
        Axis::ALL
            .iter()
            .filter_map(|axis| self.list(*axis, list_index))
            .flat_map(|list| list.rows().iter())
            .collect()
    }
}
