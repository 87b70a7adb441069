//! Test parametrization and the list-generation mode.
//!
//! A [`Configuration`] is immutable once built. The mode flags of the raw
//! settings (asymmetric step, asymmetric test size, reduced form) are folded
//! into the closed [`ListMode`] variant so the list generator dispatches on a
//! single value instead of nested flag checks.

use serde::{Deserialize, Serialize};

use super::ConfigurationError;

/// Tolerance used when comparing the test size against `g / s`.
const BOUND_TOLERANCE: f64 = 1e-9;

/// How own payoffs are spaced around the equal-payoff locus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepProfile {
    /// Equal steps of `s · g[k] / g[0]`.
    #[default]
    Linear,
    /// Small steps at the centre, geometrically growing toward the extremes.
    Geometric,
}

impl StepProfile {
    /// The extension strategy that continues this profile's progression.
    pub fn natural_extension(&self) -> ExtensionStrategy {
        match self {
            StepProfile::Linear => ExtensionStrategy::LinearContinuation,
            StepProfile::Geometric => ExtensionStrategy::GeometricDoubling,
        }
    }
}

/// How extra rows beyond the symmetric test size are extrapolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionStrategy {
    /// Repeat the boundary step `d` (offsets `d, 2d, 3d, ...`).
    LinearContinuation,
    /// Double the boundary step each row (offsets `2d, 6d, 14d, ...`).
    GeometricDoubling,
}

/// Extra rows prepended to the x-list and appended to the y-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extension {
    pub rows: u32,
    pub strategy: ExtensionStrategy,
}

/// The closed set of list-generation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListMode {
    /// `2t + 1` rows per list, optionally extended by `a` rows.
    Standard {
        steps: StepProfile,
        extension: Option<Extension>,
    },
    /// Two rows per list: one step below and one step above `e`.
    ReducedForm,
}

impl Default for ListMode {
    fn default() -> Self {
        ListMode::Standard {
            steps: StepProfile::Linear,
            extension: None,
        }
    }
}

impl ListMode {
    /// Builds a standard mode, dropping an extension with zero rows.
    pub fn standard(steps: StepProfile, extension: Option<Extension>) -> Self {
        ListMode::Standard {
            steps,
            extension: extension.filter(|ext| ext.rows > 0),
        }
    }

    /// Number of extension rows `a` (zero unless an extension is active).
    pub fn extension_rows(&self) -> u32 {
        match self {
            ListMode::Standard {
                extension: Some(ext),
                ..
            } => ext.rows,
            _ => 0,
        }
    }
}

/// Immutable parametrization of the test.
///
/// Only constructible through [`ConfigurationBuilder::build`], which validates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    equal_payoff: f64,
    gaps: Vec<f64>,
    step_size: f64,
    test_size: u32,
    mode: ListMode,
}

impl Configuration {
    /// Creates a builder seeded with the canonical parametrization
    /// (`e = 10`, `g = [3]`, `s = 1`, `t = 2`, linear steps, no extension).
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// The equal-payoff locus `e`.
    pub fn equal_payoff(&self) -> f64 {
        self.equal_payoff
    }

    /// The ordered gap sequence, one entry per list.
    pub fn gaps(&self) -> &[f64] {
        &self.gaps
    }

    /// Gap of list `k`, if it exists.
    pub fn gap(&self, list: usize) -> Option<f64> {
        self.gaps.get(list).copied()
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn test_size(&self) -> u32 {
        self.test_size
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Number of parallel lists `m`.
    pub fn list_count(&self) -> usize {
        self.gaps.len()
    }

    /// Whether more than one list is generated per axis.
    pub fn is_multi_list(&self) -> bool {
        self.gaps.len() > 1
    }

    /// Number of extension rows `a`.
    pub fn extension_rows(&self) -> u32 {
        self.mode.extension_rows()
    }

    /// Test size used for scoring: `t`, or 1 in reduced form.
    pub fn effective_test_size(&self) -> u32 {
        match self.mode {
            ListMode::ReducedForm => 1,
            ListMode::Standard { .. } => self.test_size,
        }
    }

    /// Rows per list `n`: `2t + a + 1`, or 2 in reduced form.
    pub fn rows_per_list(&self) -> usize {
        match self.mode {
            ListMode::ReducedForm => 2,
            ListMode::Standard { .. } => {
                2 * self.test_size as usize + self.extension_rows() as usize + 1
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.equal_payoff.is_finite() {
            return Err(ConfigurationError::NonFinite { name: "equal_payoff" });
        }
        if !self.step_size.is_finite() {
            return Err(ConfigurationError::NonFinite { name: "step_size" });
        }
        if self.equal_payoff <= 0.0 {
            return Err(ConfigurationError::NonPositiveEqualPayoff {
                value: self.equal_payoff,
            });
        }
        if self.step_size <= 0.0 {
            return Err(ConfigurationError::NonPositiveStepSize {
                value: self.step_size,
            });
        }
        if self.gaps.is_empty() {
            return Err(ConfigurationError::NoLists);
        }

        for (list, &gap) in self.gaps.iter().enumerate() {
            if !gap.is_finite() {
                return Err(ConfigurationError::NonFinite { name: "gap" });
            }
            if gap <= 0.0 {
                return Err(ConfigurationError::NonPositiveGap { list, gap });
            }
            if gap >= self.equal_payoff {
                return Err(ConfigurationError::GapNotBelowEqualPayoff {
                    list,
                    gap,
                    equal_payoff: self.equal_payoff,
                });
            }

            let max = gap / self.step_size;
            if self.test_size < 1 || f64::from(self.test_size) > max + BOUND_TOLERANCE {
                return Err(ConfigurationError::TestSizeOutOfRange {
                    test_size: self.test_size,
                    list,
                    max,
                });
            }
        }

        Ok(())
    }
}

/// Builder for [`Configuration`].
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    equal_payoff: f64,
    gaps: Vec<f64>,
    step_size: f64,
    test_size: u32,
    mode: ListMode,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self {
            equal_payoff: 10.0,
            gaps: vec![3.0],
            step_size: 1.0,
            test_size: 2,
            mode: ListMode::default(),
        }
    }
}

impl ConfigurationBuilder {
    pub fn equal_payoff(mut self, e: f64) -> Self {
        self.equal_payoff = e;
        self
    }

    /// Uses a single list with gap `g`.
    pub fn gap(mut self, g: f64) -> Self {
        self.gaps = vec![g];
        self
    }

    /// Uses one list per gap value, in the given order.
    pub fn gaps(mut self, gaps: impl Into<Vec<f64>>) -> Self {
        self.gaps = gaps.into();
        self
    }

    pub fn step_size(mut self, s: f64) -> Self {
        self.step_size = s;
        self
    }

    pub fn test_size(mut self, t: u32) -> Self {
        self.test_size = t;
        self
    }

    pub fn mode(mut self, mode: ListMode) -> Self {
        self.mode = match mode {
            ListMode::Standard { steps, extension } => ListMode::standard(steps, extension),
            ListMode::ReducedForm => ListMode::ReducedForm,
        };
        self
    }

    /// Validates and freezes the configuration.
    pub fn build(self) -> Result<Configuration, ConfigurationError> {
        let config = Configuration {
            equal_payoff: self.equal_payoff,
            gaps: self.gaps,
            step_size: self.step_size,
            test_size: self.test_size,
            mode: self.mode,
        };
        config.validate()?;
        Ok(config)
    }
}
