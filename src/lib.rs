//! Equality Equivalence Test - quantitative core
//!
//! This crate generates the binary allocation lists of the equality
//! equivalence test, checks a respondent's answers for single switching,
//! derives the x- and y-scores, classifies the respondent into one of nine
//! distributional-preference archetypes, estimates piecewise-linear
//! inequality weights, and resolves pair payments.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::analysis::evaluate;
pub use domain::instrument::generate_lists;
pub use domain::payment::resolve_payment;
