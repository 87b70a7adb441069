//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod evaluate_respondent;
mod prepare_session;
mod settle_pair;

pub use evaluate_respondent::{
    AnswerRevision, EvaluateRespondentCommand, EvaluateRespondentHandler,
    EvaluateRespondentResult, ReviseAnswersCommand,
};
pub use prepare_session::{PrepareSessionHandler, PreparedSession};
pub use settle_pair::{SettlePairCommand, SettlePairHandler, SettlePairResult};
