//! Piecewise-Linear Estimator - interval estimates of the inequality
//! weights σ (disadvantageous, x-lists) and γ (advantageous, y-lists).
//!
//! # Algorithm
//!
//! For each list `k` the switch count `c_k` is the number of Left choices on
//! an x-list or Right choices on a y-list. With `v_k` the own payoff at the
//! bound row, `x_k = v_k - e` and `o_k = x_k + g_k`, the bound is the
//! least-squares ratio
//!
//! ```text
//! Σ x_k·o_k / Σ o_k²
//! ```
//!
//! The lower bound reads row `c_k - 1` and needs every `c_k > 0`. The upper
//! bound reads row `c_k` and needs every `c_k < n`. The midpoint is the
//! average of both when both exist. Willingness to pay maps each value `p`
//! to `p / (1 - p)`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Axis;
use crate::domain::instrument::DecisionLists;
use crate::domain::responses::{ConsistencyResult, ResponseSet};

/// Denominators closer to zero than this are treated as zero.
const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Lower bound, midpoint and upper bound of one estimated quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalEstimate {
    pub lower: Option<f64>,
    pub midpoint: Option<f64>,
    pub upper: Option<f64>,
}

impl IntervalEstimate {
    pub fn undefined() -> Self {
        Self::default()
    }

    /// Builds an interval whose midpoint is the average of both bounds.
    pub fn from_bounds(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower,
            midpoint: lower.zip(upper).map(|(lb, ub)| (lb + ub) / 2.0),
            upper,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.lower.is_some() || self.upper.is_some()
    }

    /// The willingness-to-pay transform applied point-wise.
    ///
    /// The midpoint is transformed directly, not re-averaged.
    pub fn willingness_to_pay(&self) -> Self {
        let wtp = |value: Option<f64>| value.and_then(PiecewiseLinearEstimator::willingness_to_pay);
        Self {
            lower: wtp(self.lower),
            midpoint: wtp(self.midpoint),
            upper: wtp(self.upper),
        }
    }
}

/// All parameter estimates of one respondent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterEstimate {
    /// Disadvantageous inequality weight σ (x-lists).
    pub sigma: IntervalEstimate,
    /// Advantageous inequality weight γ (y-lists).
    pub gamma: IntervalEstimate,
    /// Willingness to pay derived from σ.
    pub wtp_disadvantageous: IntervalEstimate,
    /// Willingness to pay derived from γ.
    pub wtp_advantageous: IntervalEstimate,
}

impl ParameterEstimate {
    pub fn for_axis(&self, axis: Axis) -> &IntervalEstimate {
        match axis {
            Axis::X => &self.sigma,
            Axis::Y => &self.gamma,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Lower,
    Upper,
}

/// Piecewise-linear estimation functions.
pub struct PiecewiseLinearEstimator;

impl PiecewiseLinearEstimator {
    /// Estimates σ, γ and both willingness-to-pay intervals.
    ///
    /// # Edge Cases
    /// - Inconsistent axis: every estimate on that axis is undefined
    /// - All counts at 0 (or all at `n`): only the other bound is defined
    pub fn estimate(
        lists: &DecisionLists,
        responses: &ResponseSet,
        consistency: &ConsistencyResult,
    ) -> ParameterEstimate {
        let axis_estimate = |axis: Axis| {
            if !consistency.axis(axis) {
                return IntervalEstimate::undefined();
            }
            let counts = Self::switch_counts(responses, axis);
            Self::estimate_axis(lists, axis, &counts)
        };

        let sigma = axis_estimate(Axis::X);
        let gamma = axis_estimate(Axis::Y);

        ParameterEstimate {
            sigma,
            gamma,
            wtp_disadvantageous: sigma.willingness_to_pay(),
            wtp_advantageous: gamma.willingness_to_pay(),
        }
    }

    /// Switch counts per list: Left choices on x-lists, Right choices on y-lists.
    pub fn switch_counts(responses: &ResponseSet, axis: Axis) -> Vec<usize> {
        responses
            .sequences(axis)
            .iter()
            .map(|seq| match axis {
                Axis::X => seq.left_count(),
                Axis::Y => seq.right_count(),
            })
            .collect()
    }

    /// Interval estimate of one axis from its per-list switch counts.
    pub fn estimate_axis(lists: &DecisionLists, axis: Axis, counts: &[usize]) -> IntervalEstimate {
        if counts.is_empty() || counts.len() != lists.list_count() {
            return IntervalEstimate::undefined();
        }
        IntervalEstimate::from_bounds(
            Self::bound(lists, axis, counts, Bound::Lower),
            Self::bound(lists, axis, counts, Bound::Upper),
        )
    }

    /// `p / (1 - p)`, undefined when `p` is 1.
    pub fn willingness_to_pay(p: f64) -> Option<f64> {
        let denominator = 1.0 - p;
        if denominator.abs() < DENOMINATOR_EPSILON {
            None
        } else {
            Some(p / denominator)
        }
    }

    fn bound(lists: &DecisionLists, axis: Axis, counts: &[usize], bound: Bound) -> Option<f64> {
        let n = lists.rows_per_list();
        let e = lists.equal_payoff();
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (k, &count) in counts.iter().enumerate() {
            let row = match bound {
                Bound::Lower => count.checked_sub(1)?,
                Bound::Upper if count < n => count,
                Bound::Upper => return None,
            };
            let gap = lists.list(axis, k)?.gap;
            let x = lists.own_payoff(axis, k, row)? - e;
            let o = x + gap;
            numerator += x * o;
            denominator += o * o;
        }

        if denominator.abs() < DENOMINATOR_EPSILON {
            return None;
        }
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::{Configuration, ListGenerator};
    use crate::domain::responses::{AnswerSequence, ConsistencyChecker};

    fn assert_close(actual: Option<f64>, expected: f64) {
        let value = actual.unwrap_or_else(|| panic!("expected {}, got None", expected));
        assert!(
            (value - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            value
        );
    }

    fn estimate(gaps: Vec<f64>, x: Vec<&[u8]>, y: Vec<&[u8]>) -> ParameterEstimate {
        let config = Configuration::builder().gaps(gaps).build().unwrap();
        let lists = ListGenerator::generate(&config);
        let seqs = |raw: Vec<&[u8]>| {
            raw.into_iter()
                .map(|r| AnswerSequence::from_encoded(r).unwrap())
                .collect::<Vec<_>>()
        };
        let responses = ResponseSet::new(&lists, seqs(x), seqs(y)).unwrap();
        let consistency = ConsistencyChecker::check(&responses);
        PiecewiseLinearEstimator::estimate(&lists, &responses, &consistency)
    }

    #[test]
    fn interior_switch_defines_both_bounds() {
        let estimate = estimate(vec![3.0], vec![&[0, 0, 1, 1, 1]], vec![&[0, 0, 0, 1, 1]]);

        assert_close(estimate.sigma.lower, -0.5);
        assert_close(estimate.sigma.upper, 0.0);
        assert_close(estimate.sigma.midpoint, -0.25);

        assert_close(estimate.gamma.lower, -0.5);
        assert_close(estimate.gamma.upper, 0.0);

        assert_close(estimate.wtp_disadvantageous.lower, -1.0 / 3.0);
        assert_close(estimate.wtp_disadvantageous.upper, 0.0);
        assert_close(estimate.wtp_disadvantageous.midpoint, -0.2);
    }

    #[test]
    fn no_left_choices_leaves_lower_bound_undefined() {
        let estimate = estimate(vec![3.0], vec![&[1, 1, 1, 1, 1]], vec![&[0, 0, 0, 1, 1]]);

        assert_eq!(estimate.sigma.lower, None);
        assert_eq!(estimate.sigma.midpoint, None);
        assert_close(estimate.sigma.upper, -2.0);
        assert_eq!(estimate.wtp_disadvantageous.lower, None);
        assert_close(estimate.wtp_disadvantageous.upper, -2.0 / 3.0);
    }

    #[test]
    fn all_left_choices_leave_upper_bound_undefined() {
        let estimate = estimate(vec![3.0], vec![&[0, 0, 0, 0, 0]], vec![&[0, 0, 0, 1, 1]]);

        assert_close(estimate.sigma.lower, 0.4);
        assert_eq!(estimate.sigma.upper, None);
        assert_close(estimate.wtp_disadvantageous.lower, 0.4 / 0.6);
    }

    #[test]
    fn inconsistent_axis_has_no_estimates() {
        let estimate = estimate(vec![3.0], vec![&[0, 1, 0, 1, 1]], vec![&[0, 0, 0, 1, 1]]);

        assert_eq!(estimate.sigma, IntervalEstimate::undefined());
        assert_eq!(estimate.wtp_disadvantageous, IntervalEstimate::undefined());
        assert!(estimate.gamma.is_defined());
    }

    #[test]
    fn multiple_lists_pool_into_one_ratio() {
        let estimate = estimate(
            vec![3.0, 6.0],
            vec![&[0, 0, 1, 1, 1], &[0, 0, 1, 1, 1]],
            vec![&[0, 0, 0, 1, 1], &[0, 0, 0, 1, 1]],
        );

        assert_close(estimate.sigma.lower, -0.5);
        assert_close(estimate.sigma.upper, 0.0);
    }

    #[test]
    fn one_list_at_the_edge_blocks_the_pooled_bound() {
        let estimate = estimate(
            vec![3.0, 6.0],
            vec![&[0, 0, 1, 1, 1], &[1, 1, 1, 1, 1]],
            vec![&[0, 0, 0, 1, 1], &[0, 0, 0, 1, 1]],
        );

        assert_eq!(estimate.sigma.lower, None);
        assert!(estimate.sigma.upper.is_some());
    }

    #[test]
    fn willingness_to_pay_is_undefined_at_one() {
        assert_eq!(PiecewiseLinearEstimator::willingness_to_pay(1.0), None);
        assert_close(PiecewiseLinearEstimator::willingness_to_pay(0.5), 1.0);
        assert_close(PiecewiseLinearEstimator::willingness_to_pay(0.0), 0.0);
    }

    #[test]
    fn mismatched_counts_are_undefined() {
        let config = Configuration::builder().build().unwrap();
        let lists = ListGenerator::generate(&config);
        assert_eq!(
            PiecewiseLinearEstimator::estimate_axis(&lists, Axis::X, &[]),
            IntervalEstimate::undefined()
        );
        assert_eq!(
            PiecewiseLinearEstimator::estimate_axis(&lists, Axis::X, &[2, 2]),
            IntervalEstimate::undefined()
        );
    }
}
