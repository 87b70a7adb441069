//! List Generator - Builds the x- and y-lists from a configuration.
//!
//! # Algorithm
//!
//! Own Left payoffs `mp[k][j]` around the locus `e` depend on the mode:
//!
//! - Linear steps: `e + (j - t) · s · g[k] / g[0]`
//! - Geometric steps: `e + sign(j - t) · s · t · (2^|j - t| - 1) / (2^t - 1)`
//! - Reduced form: `[e - s · g[k] / g[0], e + s · g[k] / g[0]]`
//!
//! An extension prepends `a` rows to the x-list and appends `a` rows to the
//! y-list. Counterpart payoffs are `e + g[k]` (x) and `e - g[k]` (y); the Right
//! option is always `(e, e)`.

use tracing::{info, warn};

use super::{
    Allocation, Configuration, DecisionList, DecisionLists, DecisionRow, Extension,
    ExtensionStrategy, ListMode, StepProfile,
};
use crate::domain::foundation::{Axis, RowLabel};

/// Generator for decision lists.
pub struct ListGenerator;

impl ListGenerator {
    /// Generates every list of every axis. Pure function of the configuration.
    pub fn generate(config: &Configuration) -> DecisionLists {
        let e = config.equal_payoff();
        let mut x_lists = Vec::with_capacity(config.list_count());
        let mut y_lists = Vec::with_capacity(config.list_count());

        for (k, &gap) in config.gaps().iter().enumerate() {
            let x_own = Self::own_payoffs(config, k, Axis::X);
            let y_own = Self::own_payoffs(config, k, Axis::Y);

            x_lists.push(Self::assemble(Axis::X, k, gap, e, e + gap, &x_own));
            y_lists.push(Self::assemble(Axis::Y, k, gap, e, e - gap, &y_own));
        }

        for axis in Axis::ALL {
            let lists = match axis {
                Axis::X => &x_lists,
                Axis::Y => &y_lists,
            };
            for list in lists {
                let own = list.own_payoffs();
                info!(
                    axis = %axis,
                    list = list.list_index + 1,
                    own_payoffs = ?rounded(&own),
                    "Generated decision list"
                );
                if own.iter().any(|p| *p < 0.0) {
                    warn!(
                        axis = %axis,
                        list = list.list_index + 1,
                        "Decision list contains negative own payoffs"
                    );
                }
            }
        }

        DecisionLists::new(config.clone(), x_lists, y_lists)
    }

    /// Own Left payoffs of list `k` on `axis`, in ascending order.
    ///
    /// Returns an empty vector when `k` is not a valid list index.
    pub fn own_payoffs(config: &Configuration, k: usize, axis: Axis) -> Vec<f64> {
        let Some(gap) = config.gap(k) else {
            return Vec::new();
        };
        let e = config.equal_payoff();
        let s = config.step_size();
        let scale = gap / config.gaps()[0];

        match config.mode() {
            ListMode::ReducedForm => vec![e - s * scale, e + s * scale],
            ListMode::Standard { steps, extension } => {
                let base = Self::base_payoffs(e, s, config.test_size(), scale, steps);
                match extension {
                    Some(ext) => Self::extend(base, axis, ext),
                    None => base,
                }
            }
        }
    }

    fn base_payoffs(e: f64, s: f64, t: u32, scale: f64, steps: StepProfile) -> Vec<f64> {
        let t = t as i32;
        (0..=2 * t)
            .map(|j| {
                let offset = j - t;
                match steps {
                    StepProfile::Linear => e + f64::from(offset) * s * scale,
                    StepProfile::Geometric => {
                        let growth = (2f64.powi(offset.abs()) - 1.0) / (2f64.powi(t) - 1.0);
                        e + f64::from(offset.signum()) * s * f64::from(t) * growth
                    }
                }
            })
            .collect()
    }

    /// Prepends extension rows to the x-list or appends them to the y-list,
    /// continuing from the step `d` at that boundary.
    fn extend(base: Vec<f64>, axis: Axis, ext: Extension) -> Vec<f64> {
        let a = ext.rows as i32;
        let last = base.len() - 1;

        match axis {
            Axis::X => {
                let first = base[0];
                let d = base[1] - base[0];
                let mut payoffs: Vec<f64> = (0..a)
                    .map(|j| first - d * Self::offset_factor(ext.strategy, a - j))
                    .collect();
                payoffs.extend(base);
                payoffs
            }
            Axis::Y => {
                let end = base[last];
                let d = base[last] - base[last - 1];
                let mut payoffs = base;
                payoffs.extend((0..a).map(|j| end + d * Self::offset_factor(ext.strategy, j + 1)));
                payoffs
            }
        }
    }

    /// Multiple of the boundary step `d` at `distance` rows beyond the boundary.
    fn offset_factor(strategy: ExtensionStrategy, distance: i32) -> f64 {
        match strategy {
            ExtensionStrategy::LinearContinuation => f64::from(distance),
            ExtensionStrategy::GeometricDoubling => 2.0 * (2f64.powi(distance) - 1.0),
        }
    }

    fn assemble(
        axis: Axis,
        k: usize,
        gap: f64,
        e: f64,
        counterpart: f64,
        own: &[f64],
    ) -> DecisionList {
        let rows = own
            .iter()
            .enumerate()
            .map(|(j, &payoff)| DecisionRow {
                label: RowLabel::new(axis, j),
                left: Allocation::new(payoff, counterpart),
                right: Allocation::new(e, e),
            })
            .collect();
        DecisionList::new(axis, k, gap, rows)
    }
}

/// Pure-function alias for [`ListGenerator::generate`].
pub fn generate_lists(config: &Configuration) -> DecisionLists {
    ListGenerator::generate(config)
}

fn rounded(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| (v * 100.0).round() / 100.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_payoffs(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
        }
    }

    fn canonical() -> Configuration {
        Configuration::builder().build().unwrap()
    }

    fn geometric(extension: Option<Extension>) -> Configuration {
        Configuration::builder()
            .mode(ListMode::standard(StepProfile::Geometric, extension))
            .build()
            .unwrap()
    }

    #[test]
    fn canonical_lists_match_reference_payoffs() {
        let lists = ListGenerator::generate(&canonical());
        let x = lists.list(Axis::X, 0).unwrap();
        let y = lists.list(Axis::Y, 0).unwrap();

        assert_payoffs(&x.own_payoffs(), &[8.0, 9.0, 10.0, 11.0, 12.0]);
        assert_payoffs(&y.own_payoffs(), &[8.0, 9.0, 10.0, 11.0, 12.0]);
        assert_payoffs(&x.counterpart_payoffs(), &[13.0; 5]);
        assert_payoffs(&y.counterpart_payoffs(), &[7.0; 5]);
        assert_payoffs(&x.anchor_payoffs(), &[10.0; 5]);
    }

    #[test]
    fn rows_are_labelled_per_axis() {
        let lists = ListGenerator::generate(&canonical());
        let labels: Vec<String> = lists.list(Axis::Y, 0).unwrap().rows().iter().map(|r| r.label.to_string()).collect();
        assert_eq!(labels, vec!["y_1", "y_2", "y_3", "y_4", "y_5"]);
    }

    #[test]
    fn right_option_is_always_the_anchor() {
        let config = Configuration::builder().gaps(vec![3.0, 4.0, 5.0]).build().unwrap();
        let lists = ListGenerator::generate(&config);
        for axis in Axis::ALL {
            for list in lists.lists(axis) {
                for row in list.rows() {
                    assert_eq!(row.right, Allocation::new(10.0, 10.0));
                }
            }
        }
    }

    #[test]
    fn multiple_lists_are_scaled_by_gap_ratio() {
        let config = Configuration::builder().gaps(vec![3.0, 6.0]).build().unwrap();
        let lists = ListGenerator::generate(&config);

        assert_eq!(lists.list_count(), 2);
        assert_payoffs(
            &lists.list(Axis::X, 1).unwrap().own_payoffs(),
            &[6.0, 8.0, 10.0, 12.0, 14.0],
        );
        assert_payoffs(&lists.list(Axis::X, 1).unwrap().counterpart_payoffs(), &[16.0; 5]);
        assert_payoffs(&lists.list(Axis::Y, 1).unwrap().counterpart_payoffs(), &[4.0; 5]);
    }

    #[test]
    fn geometric_steps_shrink_toward_the_centre() {
        let lists = ListGenerator::generate(&geometric(None));
        assert_payoffs(
            &lists.list(Axis::X, 0).unwrap().own_payoffs(),
            &[8.0, 10.0 - 2.0 / 3.0, 10.0, 10.0 + 2.0 / 3.0, 12.0],
        );
    }

    #[test]
    fn geometric_steps_ignore_gap_scaling() {
        let config = Configuration::builder()
            .gaps(vec![3.0, 5.0])
            .mode(ListMode::standard(StepProfile::Geometric, None))
            .build()
            .unwrap();
        let lists = ListGenerator::generate(&config);
        assert_eq!(
            lists.list(Axis::X, 0).unwrap().own_payoffs(),
            lists.list(Axis::X, 1).unwrap().own_payoffs()
        );
    }

    #[test]
    fn linear_extension_prepends_x_and_appends_y() {
        let config = Configuration::builder()
            .mode(ListMode::standard(
                StepProfile::Linear,
                Some(Extension {
                    rows: 1,
                    strategy: ExtensionStrategy::LinearContinuation,
                }),
            ))
            .build()
            .unwrap();
        let lists = ListGenerator::generate(&config);

        assert_payoffs(
            &lists.list(Axis::X, 0).unwrap().own_payoffs(),
            &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
        );
        assert_payoffs(
            &lists.list(Axis::Y, 0).unwrap().own_payoffs(),
            &[8.0, 9.0, 10.0, 11.0, 12.0, 13.0],
        );
        assert_payoffs(&lists.list(Axis::X, 0).unwrap().counterpart_payoffs(), &[13.0; 6]);
    }

    #[test]
    fn geometric_extension_doubles_the_boundary_step() {
        let lists = ListGenerator::generate(&geometric(Some(Extension {
            rows: 2,
            strategy: ExtensionStrategy::GeometricDoubling,
        })));
        let d = 4.0 / 3.0;

        let x = lists.list(Axis::X, 0).unwrap().own_payoffs();
        assert_payoffs(&x[..3], &[8.0 - 6.0 * d, 8.0 - 2.0 * d, 8.0]);

        let y = lists.list(Axis::Y, 0).unwrap().own_payoffs();
        assert_payoffs(&y[4..], &[12.0, 12.0 + 2.0 * d, 12.0 + 6.0 * d]);
    }

    #[test]
    fn linear_continuation_on_geometric_steps_repeats_boundary_step() {
        let lists = ListGenerator::generate(&geometric(Some(Extension {
            rows: 2,
            strategy: ExtensionStrategy::LinearContinuation,
        })));
        let d = 4.0 / 3.0;

        let x = lists.list(Axis::X, 0).unwrap().own_payoffs();
        assert_payoffs(&x[..3], &[8.0 - 2.0 * d, 8.0 - d, 8.0]);
    }

    #[test]
    fn reduced_form_collapses_to_two_rows() {
        let config = Configuration::builder()
            .gaps(vec![3.0, 6.0])
            .mode(ListMode::ReducedForm)
            .build()
            .unwrap();
        let lists = ListGenerator::generate(&config);

        assert_eq!(lists.rows_per_list(), 2);
        assert_payoffs(&lists.list(Axis::X, 0).unwrap().own_payoffs(), &[9.0, 11.0]);
        assert_payoffs(&lists.list(Axis::Y, 1).unwrap().own_payoffs(), &[8.0, 12.0]);
    }

    #[test]
    fn every_list_has_n_rows() {
        let config = Configuration::builder()
            .gaps(vec![3.0, 4.0])
            .mode(ListMode::standard(
                StepProfile::Geometric,
                Some(Extension {
                    rows: 3,
                    strategy: ExtensionStrategy::GeometricDoubling,
                }),
            ))
            .build()
            .unwrap();
        let lists = ListGenerator::generate(&config);
        for axis in Axis::ALL {
            for list in lists.lists(axis) {
                assert_eq!(list.len(), config.rows_per_list());
            }
        }
    }

    #[test]
    fn own_payoffs_for_unknown_list_is_empty() {
        assert!(ListGenerator::own_payoffs(&canonical(), 3, Axis::X).is_empty());
    }

    #[test]
    fn payment_rows_concatenate_x_then_y() {
        let lists = ListGenerator::generate(&canonical());
        let rows = lists.payment_rows(0);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].label, RowLabel::x(0));
        assert_eq!(rows[5].label, RowLabel::y(0));
    }

    #[test]
    fn generation_is_deterministic() {
        let config = geometric(Some(Extension {
            rows: 1,
            strategy: ExtensionStrategy::GeometricDoubling,
        }));
        assert_eq!(ListGenerator::generate(&config), generate_lists(&config));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn own_payoffs_are_non_decreasing(
                t in 1u32..4,
                extra_gap in 0.0f64..3.0,
                rows in 0u32..4,
                geometric_steps in any::<bool>(),
                doubling in any::<bool>(),
            ) {
                let steps = if geometric_steps { StepProfile::Geometric } else { StepProfile::Linear };
                let strategy = if doubling {
                    ExtensionStrategy::GeometricDoubling
                } else {
                    ExtensionStrategy::LinearContinuation
                };
                let config = Configuration::builder()
                    .equal_payoff(20.0)
                    .gaps(vec![4.0, 4.0 + extra_gap])
                    .test_size(t)
                    .mode(ListMode::standard(steps, Some(Extension { rows, strategy })))
                    .build()
                    .unwrap();
                let lists = ListGenerator::generate(&config);

                for axis in Axis::ALL {
                    for list in lists.lists(axis) {
                        let own = list.own_payoffs();
                        prop_assert_eq!(own.len(), config.rows_per_list());
                        prop_assert!(own.windows(2).all(|w| w[0] <= w[1]));
                    }
                }
            }
        }
    }
}
