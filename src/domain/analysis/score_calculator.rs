//! Score Calculator - x- and y-scores from the switching pattern.
//!
//! With `xr` / `yr` the number of Right choices and `u = t + a`:
//!
//! - x-score = `(u + 0.5) - xr`
//! - y-score = `yr - (t + 0.5)`
//!
//! The magnitude says how many rows away from the equal-payoff locus the
//! switch happened; the sign gives the direction of the inferred preference.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Axis;
use crate::domain::instrument::Configuration;
use crate::domain::responses::{ConsistencyResult, ResponseSet};

/// The two preference indices. Each is undefined when its list is inconsistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Scores {
    pub fn undefined() -> Self {
        Self::default()
    }

    /// Both scores, if both are defined.
    pub fn pair(&self) -> Option<(f64, f64)> {
        self.x.zip(self.y)
    }
}

/// Calculator for x- and y-scores.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// x-score for a given count of Right choices on the x-list.
    pub fn x_score(config: &Configuration, right_count: usize) -> f64 {
        let u = config.effective_test_size() + config.extension_rows();
        (f64::from(u) + 0.5) - right_count as f64
    }

    /// y-score for a given count of Right choices on the y-list.
    pub fn y_score(config: &Configuration, right_count: usize) -> f64 {
        right_count as f64 - (f64::from(config.effective_test_size()) + 0.5)
    }

    /// Computes both scores.
    ///
    /// # Edge Cases
    /// - More than one list: both undefined
    /// - Inconsistent axis: that axis's score is undefined
    pub fn compute(
        config: &Configuration,
        responses: &ResponseSet,
        consistency: &ConsistencyResult,
    ) -> Scores {
        if config.is_multi_list() {
            return Scores::undefined();
        }

        let right_count = |axis: Axis| {
            responses
                .sequence(axis, 0)
                .filter(|_| consistency.axis(axis))
                .map(|seq| seq.right_count())
        };

        Scores {
            x: right_count(Axis::X).map(|xr| Self::x_score(config, xr)),
            y: right_count(Axis::Y).map(|yr| Self::y_score(config, yr)),
        }
    }
}
