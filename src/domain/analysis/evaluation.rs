//! Evaluation - consistency, scores, archetype and parameter estimates of one
//! respondent, computed together from a finalized response set.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    Archetype, ArchetypeClassifier, ParameterEstimate, PiecewiseLinearEstimator, ScoreCalculator,
    Scores,
};
use crate::domain::foundation::{Axis, RespondentId};
use crate::domain::instrument::DecisionLists;
use crate::domain::responses::{ConsistencyChecker, ConsistencyResult, ResponseSet};

/// Everything derived from one respondent's answers.
///
/// Every field is a pure function of the response set and the lists, so
/// re-evaluating unchanged answers yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub consistency: ConsistencyResult,
    pub scores: Scores,
    pub archetype: Option<Archetype>,
    pub parameters: ParameterEstimate,
}

/// An evaluation attributed to a respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondentEvaluation {
    pub respondent_id: RespondentId,
    pub evaluation: Evaluation,
}

/// Runs the full analysis pipeline.
pub struct Evaluator;

impl Evaluator {
    pub fn evaluate(lists: &DecisionLists, responses: &ResponseSet) -> Evaluation {
        let consistency = ConsistencyChecker::check(responses);
        for axis in Axis::ALL {
            if let Some(violation) = consistency.violation(axis) {
                warn!(
                    axis = %axis,
                    list = violation.list + 1,
                    row = violation.row + 1,
                    "Inconsistent switching; estimates for this axis are undefined"
                );
            }
        }

        let scores = ScoreCalculator::compute(lists.config(), responses, &consistency);
        let archetype = ArchetypeClassifier::classify(&scores);
        let parameters = PiecewiseLinearEstimator::estimate(lists, responses, &consistency);

        debug!(
            x_score = ?scores.x,
            y_score = ?scores.y,
            archetype = ?archetype.map(|a| a.label()),
            sigma = ?parameters.sigma.midpoint,
            gamma = ?parameters.gamma.midpoint,
            "Evaluated responses"
        );

        Evaluation {
            consistency,
            scores,
            archetype,
            parameters,
        }
    }

    pub fn evaluate_respondent(
        lists: &DecisionLists,
        respondent_id: RespondentId,
        responses: &ResponseSet,
    ) -> RespondentEvaluation {
        RespondentEvaluation {
            respondent_id,
            evaluation: Self::evaluate(lists, responses),
        }
    }
}

/// Evaluates a finalized response set against the lists it answers.
pub fn evaluate(lists: &DecisionLists, responses: &ResponseSet) -> Evaluation {
    Evaluator::evaluate(lists, responses)
}
