//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the equality equivalence test.

mod choice;
mod errors;
mod ids;

pub use choice::{Axis, Choice, RowLabel};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::RespondentId;
