//! Analysis of finalized responses: scores, archetypes, parameter estimates
//! and session-level aggregation.

mod archetype;
mod evaluation;
mod piecewise_linear;
mod score_calculator;
mod session_summary;

pub use archetype::{Archetype, ArchetypeClassifier, SCORE_TOLERANCE};
pub use evaluation::{evaluate, Evaluation, Evaluator, RespondentEvaluation};
pub use piecewise_linear::{IntervalEstimate, ParameterEstimate, PiecewiseLinearEstimator};
pub use score_calculator::{ScoreCalculator, Scores};
pub use session_summary::{
    ArchetypeFrequency, QuadrantCounts, ScoreBubble, SessionSummary, SummaryRow,
};
