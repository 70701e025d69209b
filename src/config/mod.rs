//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! file and environment variables using the `config` and `dotenvy` crates.
//! Environment variables use the `ADU_ESTIMATOR` prefix and nested values
//! use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use adu_estimator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Output format: {}", config.display.format);
//! ```

mod display;
mod error;
mod logging;
mod wizard;

pub use display::{DisplayConfig, OutputFormat};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use wizard::WizardConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "ADU_ESTIMATOR";

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Preselected wizard answers
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Output format
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `ADU_ESTIMATOR__DISPLAY__FORMAT=json` -> `display.format = json`
    /// - `ADU_ESTIMATOR__WIZARD__DEFAULT_UNIT_TYPE=detached_1br`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file(None)
    }

    /// Load configuration from a file, then environment variables
    ///
    /// The file format is inferred from its extension (TOML, YAML, JSON).
    /// Environment variables take precedence over the file.
    pub fn load_with_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}
