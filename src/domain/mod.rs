//! Domain layer containing the test's business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (choices, row labels, IDs, errors)
//! - `instrument` - Configuration, list generation and presentation plans
//! - `responses` - Answer collection and the consistency check
//! - `analysis` - Scores, archetypes, parameter estimates and session summaries
//! - `payment` - Role assignment, payment draws and pair payoff resolution

pub mod analysis;
pub mod foundation;
pub mod instrument;
pub mod payment;
pub mod responses;
