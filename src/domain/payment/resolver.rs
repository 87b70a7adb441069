//! Payment Resolver - realized payoffs for both members of a pair.
//!
//! A binding decision pays its maker the own payoff of the chosen option and
//! pays the partner the counterpart payoff of the same option. Under `fixed`
//! roles only position one's decision binds; under `uncertain` the drawn
//! position's decision binds; under `double` both bind independently and
//! each respondent receives the sum.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PairPosition, PaymentError, PaymentSelection, Role, RoleAssignment};
use crate::domain::foundation::{Choice, RowLabel};
use crate::domain::instrument::{DecisionLists, DecisionRow};

/// The inputs to resolution for one pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSelections {
    pub first: Option<PaymentSelection>,
    pub second: Option<PaymentSelection>,
    /// Drawn binding respondent; only read under uncertain roles.
    pub binding: Option<PairPosition>,
}

impl PairSelections {
    pub fn selection(&self, position: PairPosition) -> Option<PaymentSelection> {
        match position {
            PairPosition::First => self.first,
            PairPosition::Second => self.second,
        }
    }
}

/// One paid amount and the decision it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffComponent {
    /// Whose decision produced this amount.
    pub decided_by: PairPosition,
    pub list_index: usize,
    pub row: RowLabel,
    pub decision: Choice,
    /// `Active` when the recipient made the decision, `Passive` otherwise.
    pub role: Role,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondentPayoff {
    pub position: PairPosition,
    pub components: Vec<PayoffComponent>,
    pub total: f64,
}

impl RespondentPayoff {
    fn new(position: PairPosition) -> Self {
        Self {
            position,
            components: Vec::new(),
            total: 0.0,
        }
    }

    fn push(&mut self, component: PayoffComponent) {
        self.total += component.amount;
        self.components.push(component);
    }

    /// Number of binding rows this respondent is paid from.
    pub fn binding_rows(&self) -> usize {
        self.components.len()
    }
}

/// Realized payment for a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairPayoff {
    pub mode: RoleAssignment,
    /// Positions whose decisions were binding, in seat order.
    pub binding: Vec<PairPosition>,
    pub first: RespondentPayoff,
    pub second: RespondentPayoff,
}

impl PairPayoff {
    pub fn respondent(&self, position: PairPosition) -> &RespondentPayoff {
        match position {
            PairPosition::First => &self.first,
            PairPosition::Second => &self.second,
        }
    }

    pub fn totals(&self) -> (f64, f64) {
        (self.first.total, self.second.total)
    }
}

/// Payment resolution functions.
pub struct PaymentResolver;

impl PaymentResolver {
    /// Resolves the pair's payoffs.
    ///
    /// # Errors
    ///
    /// - `MissingSelection` if a binding position has no selection
    /// - `MissingBindingDraw` under uncertain roles without a drawn position
    /// - `ListOutOfRange` / `RowOutOfRange` if a selection does not fit the lists
    pub fn resolve(
        lists: &DecisionLists,
        mode: RoleAssignment,
        selections: &PairSelections,
    ) -> Result<PairPayoff, PaymentError> {
        let binding = match mode {
            RoleAssignment::Fixed => vec![PairPosition::First],
            RoleAssignment::Uncertain => {
                vec![selections.binding.ok_or(PaymentError::MissingBindingDraw)?]
            }
            RoleAssignment::Double => PairPosition::ALL.to_vec(),
        };

        let mut first = RespondentPayoff::new(PairPosition::First);
        let mut second = RespondentPayoff::new(PairPosition::Second);

        for &decider in &binding {
            let selection = selections
                .selection(decider)
                .ok_or(PaymentError::MissingSelection { position: decider })?;
            let row = Self::binding_row(lists, &selection)?;
            let allocation = row.allocation(selection.decision);

            let component = |role: Role, amount: f64| PayoffComponent {
                decided_by: decider,
                list_index: selection.list_index,
                row: selection.row,
                decision: selection.decision,
                role,
                amount,
            };
            let active = component(Role::Active, allocation.own);
            let passive = component(Role::Passive, allocation.other);

            match decider {
                PairPosition::First => {
                    first.push(active);
                    second.push(passive);
                }
                PairPosition::Second => {
                    second.push(active);
                    first.push(passive);
                }
            }
        }

        debug!(
            mode = %mode,
            first_total = first.total,
            second_total = second.total,
            "Resolved pair payment"
        );

        Ok(PairPayoff {
            mode,
            binding,
            first,
            second,
        })
    }

    fn binding_row<'a>(
        lists: &'a DecisionLists,
        selection: &PaymentSelection,
    ) -> Result<&'a DecisionRow, PaymentError> {
        if selection.list_index >= lists.list_count() {
            return Err(PaymentError::ListOutOfRange {
                list: selection.list_index,
                lists: lists.list_count(),
            });
        }
        lists
            .row(selection.list_index, selection.row)
            .ok_or(PaymentError::RowOutOfRange {
                list: selection.list_index,
                label: selection.row,
            })
    }
}

/// Resolves a pair's payment under the given role assignment.
pub fn resolve_payment(
    lists: &DecisionLists,
    mode: RoleAssignment,
    selections: &PairSelections,
) -> Result<PairPayoff, PaymentError> {
    PaymentResolver::resolve(lists, mode, selections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::{Configuration, ListGenerator};

    fn lists() -> DecisionLists {
        ListGenerator::generate(&Configuration::builder().build().unwrap())
    }

    fn selections(
        first: Option<PaymentSelection>,
        second: Option<PaymentSelection>,
        binding: Option<PairPosition>,
    ) -> PairSelections {
        PairSelections {
            first,
            second,
            binding,
        }
    }

    // x_0 Left pays (8, 13); y_4 Left pays (12, 7); Right always pays (10, 10).
    fn x0_left() -> PaymentSelection {
        PaymentSelection::new(0, RowLabel::x(0), Choice::Left)
    }

    fn y4_left() -> PaymentSelection {
        PaymentSelection::new(0, RowLabel::y(4), Choice::Left)
    }

    #[test]
    fn fixed_roles_pay_first_decision_to_both() {
        let payoff = resolve_payment(
            &lists(),
            RoleAssignment::Fixed,
            &selections(Some(x0_left()), Some(y4_left()), None),
        )
        .unwrap();

        assert_eq!(payoff.binding, vec![PairPosition::First]);
        assert_eq!(payoff.totals(), (8.0, 13.0));
        assert_eq!(payoff.first.binding_rows(), 1);
        assert_eq!(payoff.second.binding_rows(), 1);
        assert_eq!(payoff.second.components[0].role, Role::Passive);
        assert_eq!(payoff.second.components[0].decided_by, PairPosition::First);
    }

    #[test]
    fn fixed_roles_do_not_need_second_selection() {
        let payoff = resolve_payment(
            &lists(),
            RoleAssignment::Fixed,
            &selections(Some(x0_left()), None, None),
        )
        .unwrap();
        assert_eq!(payoff.totals(), (8.0, 13.0));
    }

    #[test]
    fn fixed_roles_require_first_selection() {
        let result = resolve_payment(
            &lists(),
            RoleAssignment::Fixed,
            &selections(None, Some(y4_left()), None),
        );
        assert_eq!(
            result,
            Err(PaymentError::MissingSelection {
                position: PairPosition::First
            })
        );
    }

    #[test]
    fn uncertain_roles_pay_the_drawn_decision() {
        let payoff = resolve_payment(
            &lists(),
            RoleAssignment::Uncertain,
            &selections(Some(x0_left()), Some(y4_left()), Some(PairPosition::Second)),
        )
        .unwrap();

        assert_eq!(payoff.binding, vec![PairPosition::Second]);
        assert_eq!(payoff.totals(), (7.0, 12.0));
    }

    #[test]
    fn uncertain_roles_require_binding_draw() {
        let result = resolve_payment(
            &lists(),
            RoleAssignment::Uncertain,
            &selections(Some(x0_left()), Some(y4_left()), None),
        );
        assert_eq!(result, Err(PaymentError::MissingBindingDraw));
    }

    #[test]
    fn double_roles_sum_active_and_counterpart_payoffs() {
        let payoff = resolve_payment(
            &lists(),
            RoleAssignment::Double,
            &selections(Some(x0_left()), Some(y4_left()), None),
        )
        .unwrap();

        // first: 8 as decider + 7 as counterpart; second: 12 + 13
        assert_eq!(payoff.totals(), (15.0, 25.0));
        assert_eq!(payoff.first.binding_rows(), 2);
        assert_eq!(payoff.second.binding_rows(), 2);
    }

    #[test]
    fn double_roles_with_right_choices_pay_the_anchor() {
        let right = PaymentSelection::new(0, RowLabel::x(2), Choice::Right);
        let payoff = resolve_payment(
            &lists(),
            RoleAssignment::Double,
            &selections(Some(right), Some(right), None),
        )
        .unwrap();
        assert_eq!(payoff.totals(), (20.0, 20.0));
    }

    #[test]
    fn binding_draw_is_ignored_outside_uncertain_roles() {
        let payoff = resolve_payment(
            &lists(),
            RoleAssignment::Fixed,
            &selections(Some(x0_left()), Some(y4_left()), Some(PairPosition::Second)),
        )
        .unwrap();
        assert_eq!(payoff.binding, vec![PairPosition::First]);
    }

    #[test]
    fn rejects_rows_outside_the_lists() {
        let bad = PaymentSelection::new(0, RowLabel::x(9), Choice::Left);
        assert!(matches!(
            resolve_payment(&lists(), RoleAssignment::Fixed, &selections(Some(bad), None, None)),
            Err(PaymentError::RowOutOfRange { .. })
        ));

        let bad = PaymentSelection::new(3, RowLabel::x(0), Choice::Left);
        assert!(matches!(
            resolve_payment(&lists(), RoleAssignment::Fixed, &selections(Some(bad), None, None)),
            Err(PaymentError::ListOutOfRange { list: 3, lists: 1 })
        ));
    }
}
