//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EVENT_REGISTRATION` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use event_registration::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Prices in {}", config.pricing.currency);
//! ```

mod error;
mod logging;
mod pricing;
mod submission;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use pricing::PricingConfig;
pub use submission::SubmissionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency and free-tier label
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Submission sink endpoint and retry policy
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EVENT_REGISTRATION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EVENT_REGISTRATION__PRICING__CURRENCY=EUR` -> `pricing.currency = "EUR"`
    /// - `EVENT_REGISTRATION__SUBMISSION__MAX_ATTEMPTS=3` -> `submission.max_attempts = 3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EVENT_REGISTRATION")
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
        self.pricing.validate()?;
        self.submission.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
