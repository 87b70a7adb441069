//! Instrument parametrization settings

use serde::Deserialize;

use crate::domain::instrument::{
    Configuration, ConfigurationError, Extension, ExtensionStrategy, ListMode, StepProfile,
};

/// Raw test parametrization and mode flags.
///
/// Folded into a validated [`Configuration`] by [`InstrumentSettings::to_configuration`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstrumentSettings {
    /// Equal-payoff locus `e`
    #[serde(default = "default_equal_payoff")]
    pub equal_payoff: f64,

    /// Gap `g` used when `multiple_lists` is off
    #[serde(default = "default_gap")]
    pub gap: f64,

    /// Step size `s`
    #[serde(default = "default_step_size")]
    pub step_size: f64,

    /// Test size `t`
    #[serde(default = "default_test_size")]
    pub test_size: u32,

    /// Geometric instead of equal steps
    #[serde(default)]
    pub asymmetric_step: bool,

    /// Extend the x-list left and the y-list right by `extension_rows`
    #[serde(default)]
    pub asymmetric_test_size: bool,

    /// Extension width `a`
    #[serde(default = "default_extension_rows")]
    pub extension_rows: u32,

    /// Overrides the extension strategy implied by the step profile
    #[serde(default)]
    pub extension_strategy: Option<ExtensionStrategy>,

    /// One list per entry of `multiple_gaps`
    #[serde(default)]
    pub multiple_lists: bool,

    #[serde(default = "default_multiple_gaps")]
    pub multiple_gaps: Vec<f64>,

    /// Two rows per list; overrides the step and extension flags
    #[serde(default)]
    pub reduced_form: bool,
}

impl Default for InstrumentSettings {
    fn default() -> Self {
        Self {
            equal_payoff: default_equal_payoff(),
            gap: default_gap(),
            step_size: default_step_size(),
            test_size: default_test_size(),
            asymmetric_step: false,
            asymmetric_test_size: false,
            extension_rows: default_extension_rows(),
            extension_strategy: None,
            multiple_lists: false,
            multiple_gaps: default_multiple_gaps(),
            reduced_form: false,
        }
    }
}

impl InstrumentSettings {
    /// The list-generation mode selected by the flags.
    pub fn list_mode(&self) -> ListMode {
        if self.reduced_form {
            return ListMode::ReducedForm;
        }

        let steps = if self.asymmetric_step {
            StepProfile::Geometric
        } else {
            StepProfile::Linear
        };
        let extension = self.asymmetric_test_size.then(|| Extension {
            rows: self.extension_rows,
            strategy: self
                .extension_strategy
                .unwrap_or_else(|| steps.natural_extension()),
        });

        ListMode::standard(steps, extension)
    }

    /// Gap sequence: `multiple_gaps` in multi-list mode, otherwise `[gap]`.
    pub fn gaps(&self) -> Vec<f64> {
        if self.multiple_lists {
            self.multiple_gaps.clone()
        } else {
            vec![self.gap]
        }
    }

    /// Builds and validates the immutable configuration.
    pub fn to_configuration(&self) -> Result<Configuration, ConfigurationError> {
        Configuration::builder()
            .equal_payoff(self.equal_payoff)
            .gaps(self.gaps())
            .step_size(self.step_size)
            .test_size(self.test_size)
            .mode(self.list_mode())
            .build()
    }
}

fn default_equal_payoff() -> f64 {
    10.0
}

fn default_gap() -> f64 {
    3.0
}

fn default_step_size() -> f64 {
    1.0
}

fn default_test_size() -> u32 {
    2
}

fn default_extension_rows() -> u32 {
    1
}

fn default_multiple_gaps() -> Vec<f64> {
    vec![3.0, 4.0, 5.0]
}
