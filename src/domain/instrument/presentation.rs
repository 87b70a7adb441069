//! Presentation plan - list ordering and row shuffling per respondent.
//!
//! Rows are shown in ascending order of own payoff unless shuffling is
//! enabled. The x- and y-lists are shown x first unless counterbalancing
//! draws the reverse order.

use serde::{Deserialize, Serialize};

use super::DecisionLists;
use crate::domain::foundation::Axis;
use crate::ports::RandomSource;

/// Order in which the two lists are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListOrdering {
    #[default]
    #[serde(rename = "xy")]
    XFirst,
    #[serde(rename = "yx")]
    YFirst,
}

impl ListOrdering {
    pub fn axes(&self) -> [Axis; 2] {
        match self {
            ListOrdering::XFirst => [Axis::X, Axis::Y],
            ListOrdering::YFirst => [Axis::Y, Axis::X],
        }
    }
}

/// Display order of the lists and of the rows within each list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationPlan {
    pub ordering: ListOrdering,
    /// Row display order per list index, x-list.
    pub x_rows: Vec<Vec<usize>>,
    /// Row display order per list index, y-list.
    pub y_rows: Vec<Vec<usize>>,
}

impl PresentationPlan {
    /// Ascending rows, x-list first.
    pub fn ascending(lists: &DecisionLists) -> Self {
        let n = lists.rows_per_list();
        let identity = vec![(0..n).collect::<Vec<_>>(); lists.list_count()];
        Self {
            ordering: ListOrdering::XFirst,
            x_rows: identity.clone(),
            y_rows: identity,
        }
    }

    /// Draws a plan: the ordering when `counterbalance` is set, and a row
    /// permutation for every list when `shuffle` is set.
    pub fn draw(
        lists: &DecisionLists,
        counterbalance: bool,
        shuffle: bool,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let mut plan = Self::ascending(lists);

        if counterbalance && rng.coin_flip() {
            plan.ordering = ListOrdering::YFirst;
        }

        if shuffle {
            let n = lists.rows_per_list();
            for order in plan.x_rows.iter_mut().chain(plan.y_rows.iter_mut()) {
                *order = rng.permutation(n);
            }
        }

        plan
    }

    pub fn rows(&self, axis: Axis, list_index: usize) -> Option<&[usize]> {
        let orders = match axis {
            Axis::X => &self.x_rows,
            Axis::Y => &self.y_rows,
        };
        orders.get(list_index).map(Vec::as_slice)
    }
}
