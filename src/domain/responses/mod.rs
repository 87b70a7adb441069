//! Responses module - Answer collection and consistency checking.
//!
//! # Components
//!
//! - `AnswerSheet` - Row-label to choice mapping, filled incrementally and revisable
//! - `AnswerSequence` / `ResponseSet` - Finalized, immutable answers
//! - `ConsistencyChecker` - Single-switch validation per list and axis

mod answer_sheet;
mod consistency;
mod errors;

pub use answer_sheet::{AnswerSequence, AnswerSheet, ResponseSet};
pub use consistency::{ConsistencyChecker, ConsistencyResult, Violation};
pub use errors::AnswerError;
