//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables and files using the `config` and `dotenvy` crates. Environment
//! variables use the `EET` prefix and nested values are separated by double
//! underscores.
//!
//! # Example
//!
//! ```no_run
//! use equality_equivalence::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! let configuration = config.validate().expect("Invalid configuration");
//!
//! println!("{} rows per list", configuration.rows_per_list());
//! ```

mod error;
mod instrument;
mod session;

pub use error::ConfigError;
pub use instrument::InstrumentSettings;
pub use session::{PresentationSettings, RoleSettings};

use serde::Deserialize;
use std::path::Path;

use crate::domain::instrument::Configuration;

const ENV_PREFIX: &str = "EET";

/// Root application configuration
///
/// Every section has defaults equal to the canonical parametrization, so an
/// empty environment yields a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Test parametrization and list-generation flags
    #[serde(default)]
    pub instrument: InstrumentSettings,

    /// Role assignment within pairs
    #[serde(default)]
    pub roles: RoleSettings,

    /// Counterbalancing and row shuffling
    #[serde(default)]
    pub presentation: PresentationSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EET` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EET__INSTRUMENT__TEST_SIZE=3` -> `instrument.test_size = 3`
    /// - `EET__INSTRUMENT__MULTIPLE_GAPS=3,4,5` -> `instrument.multiple_gaps = [3, 4, 5]`
    /// - `EET__ROLES__ASSIGNMENT=double` -> `roles.assignment = double`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a TOML, JSON or YAML file, with environment
    /// variables taking precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate the instrument settings and build the immutable configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if the parametrization is invalid.
    pub fn validate(&self) -> Result<Configuration, ConfigError> {
        Ok(self.instrument.to_configuration()?)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("instrument.multiple_gaps")
    }
}
