//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates with ports.

pub mod handlers;

pub use handlers::{
    // Session preparation
    PrepareSessionHandler, PreparedSession,
    // Respondent evaluation
    AnswerRevision, EvaluateRespondentCommand, EvaluateRespondentHandler,
    EvaluateRespondentResult, ReviseAnswersCommand,
    // Pair settlement
    SettlePairCommand, SettlePairHandler, SettlePairResult,
};
