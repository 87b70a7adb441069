//! EvaluateRespondentHandler - Command handler for evaluating and revising
//! a respondent's answers.

use std::sync::Arc;

use tracing::debug;

use crate::domain::analysis::{Evaluator, RespondentEvaluation};
use crate::domain::foundation::{Choice, DomainError, RespondentId, RowLabel};
use crate::domain::instrument::DecisionLists;
use crate::domain::responses::{AnswerSheet, ResponseSet};

/// Command to evaluate a completed answer sheet.
#[derive(Debug, Clone)]
pub struct EvaluateRespondentCommand {
    pub respondent_id: RespondentId,
    pub sheet: AnswerSheet,
}

/// A single changed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRevision {
    pub list_index: usize,
    pub row: RowLabel,
    pub choice: Choice,
}

/// Command to revise answers and re-run the evaluation.
#[derive(Debug, Clone)]
pub struct ReviseAnswersCommand {
    pub respondent_id: RespondentId,
    pub sheet: AnswerSheet,
    pub revisions: Vec<AnswerRevision>,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateRespondentResult {
    /// The sheet the evaluation was computed from, including any revisions.
    pub sheet: AnswerSheet,
    pub responses: ResponseSet,
    pub evaluation: RespondentEvaluation,
}

/// Handler for respondent evaluation.
pub struct EvaluateRespondentHandler {
    lists: Arc<DecisionLists>,
}

impl EvaluateRespondentHandler {
    pub fn new(lists: Arc<DecisionLists>) -> Self {
        Self { lists }
    }

    /// Finalizes the sheet and evaluates it.
    ///
    /// # Errors
    ///
    /// `INCOMPLETE_ANSWERS` if any row of any list is unanswered.
    pub fn handle(
        &self,
        cmd: EvaluateRespondentCommand,
    ) -> Result<EvaluateRespondentResult, DomainError> {
        let responses = cmd.sheet.finalize()?;
        let evaluation = Evaluator::evaluate_respondent(&self.lists, cmd.respondent_id, &responses);

        debug!(
            respondent_id = %cmd.respondent_id,
            archetype = ?evaluation.evaluation.archetype.map(|a| a.label()),
            "Respondent evaluated"
        );

        Ok(EvaluateRespondentResult {
            sheet: cmd.sheet,
            responses,
            evaluation,
        })
    }

    /// Applies the revisions and recomputes every derived result from scratch.
    ///
    /// # Errors
    ///
    /// `UNKNOWN_ROW` / `OUT_OF_RANGE` for revisions outside the lists, and
    /// `INCOMPLETE_ANSWERS` if the revised sheet is still incomplete.
    pub fn revise(&self, cmd: ReviseAnswersCommand) -> Result<EvaluateRespondentResult, DomainError> {
        let mut sheet = cmd.sheet;
        for revision in &cmd.revisions {
            let previous = sheet.record(revision.list_index, revision.row, revision.choice)?;
            debug!(
                respondent_id = %cmd.respondent_id,
                list = revision.list_index + 1,
                row = %revision.row,
                previous = ?previous,
                choice = %revision.choice,
                "Answer revised"
            );
        }

        self.handle(EvaluateRespondentCommand {
            respondent_id: cmd.respondent_id,
            sheet,
        })
    }
}
