//! Configuration errors raised before any list is generated.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Fatal problems with the test parametrization.
///
/// All of these are detected when a [`Configuration`](super::Configuration)
/// is built, before any respondent sees the instrument.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Parameter '{name}' must be a finite number")]
    NonFinite { name: &'static str },

    #[error("Equal payoff e must be positive, got {value}")]
    NonPositiveEqualPayoff { value: f64 },

    #[error("Step size s must be positive, got {value}")]
    NonPositiveStepSize { value: f64 },

    #[error("At least one gap value is required")]
    NoLists,

    #[error("Gap g[{list}] must be positive, got {gap}")]
    NonPositiveGap { list: usize, gap: f64 },

    #[error("Gap g[{list}] = {gap} must be strictly smaller than e = {equal_payoff}")]
    GapNotBelowEqualPayoff {
        list: usize,
        gap: f64,
        equal_payoff: f64,
    },

    #[error("Test size t = {test_size} must lie in [1, g[{list}]/s = {max}]")]
    TestSizeOutOfRange {
        test_size: u32,
        list: usize,
        max: f64,
    },
}

impl ConfigurationError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidConfiguration
    }
}

impl From<ConfigurationError> for DomainError {
    fn from(err: ConfigurationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
