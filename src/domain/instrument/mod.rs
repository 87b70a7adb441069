//! Instrument module - Parametrization and decision-list generation.
//!
//! # Components
//!
//! - `Configuration` - Validated, immutable parameters and the `ListMode` variant
//! - `ListGenerator` - Builds the x- and y-lists (pure function of the configuration)
//! - `PresentationPlan` - Counterbalanced list ordering and optional row shuffles

mod configuration;
mod decision_list;
mod errors;
mod list_generator;
mod presentation;

pub use configuration::{
    Configuration, ConfigurationBuilder, Extension, ExtensionStrategy, ListMode, StepProfile,
};
pub use decision_list::{Allocation, DecisionList, DecisionLists, DecisionRow};
pub use errors::ConfigurationError;
pub use list_generator::{generate_lists, ListGenerator};
pub use presentation::{ListOrdering, PresentationPlan};
