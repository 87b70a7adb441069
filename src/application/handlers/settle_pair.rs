//! SettlePairHandler - Draws the paid rows for a pair and resolves payment.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::instrument::DecisionLists;
use crate::domain::payment::{
    draw_binding_position, PairPayoff, PairPosition, PairSelections, PaymentError,
    PaymentResolver, PaymentSelection, Role, RoleAssignment,
};
use crate::domain::responses::ResponseSet;
use crate::ports::RandomSource;

/// Command to settle a pair.
///
/// Under fixed roles the second respondent is passive and needs no responses.
#[derive(Debug, Clone)]
pub struct SettlePairCommand {
    pub mode: RoleAssignment,
    pub first: Option<ResponseSet>,
    pub second: Option<ResponseSet>,
}

impl SettlePairCommand {
    fn responses(&self, position: PairPosition) -> Option<&ResponseSet> {
        match position {
            PairPosition::First => self.first.as_ref(),
            PairPosition::Second => self.second.as_ref(),
        }
    }
}

/// Result of settling a pair.
#[derive(Debug, Clone)]
pub struct SettlePairResult {
    pub selections: PairSelections,
    pub payoff: PairPayoff,
}

/// Handler for pair settlement.
pub struct SettlePairHandler {
    lists: Arc<DecisionLists>,
    rng: Box<dyn RandomSource>,
}

impl SettlePairHandler {
    pub fn new(lists: Arc<DecisionLists>, rng: Box<dyn RandomSource>) -> Self {
        Self { lists, rng }
    }

    /// Draws a selection for every active respondent, draws the binding
    /// respondent under uncertain roles, then resolves the payoffs.
    ///
    /// # Errors
    ///
    /// `MISSING_SELECTION` if an active respondent has no responses.
    pub fn handle(&mut self, cmd: SettlePairCommand) -> Result<SettlePairResult, DomainError> {
        let selections = self.draw_selections(&cmd)?;
        let payoff = PaymentResolver::resolve(&self.lists, cmd.mode, &selections)?;

        info!(
            mode = %cmd.mode,
            binding = ?payoff.binding,
            first_total = payoff.first.total,
            second_total = payoff.second.total,
            "Pair settled"
        );

        Ok(SettlePairResult { selections, payoff })
    }

    fn draw_selections(&mut self, cmd: &SettlePairCommand) -> Result<PairSelections, PaymentError> {
        let mut selections = PairSelections::default();

        for position in PairPosition::ALL {
            if cmd.mode.role_of(position) == Role::Passive {
                continue;
            }
            let responses = cmd
                .responses(position)
                .ok_or(PaymentError::MissingSelection { position })?;
            let selection = PaymentSelection::draw(&self.lists, responses, self.rng.as_mut())?;
            match position {
                PairPosition::First => selections.first = Some(selection),
                PairPosition::Second => selections.second = Some(selection),
            }
        }

        if cmd.mode.requires_binding_draw() {
            selections.binding = Some(draw_binding_position(self.rng.as_mut()));
        }

        Ok(selections)
    }
}
