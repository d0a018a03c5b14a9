//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Currency must be a three-letter uppercase code, got '{0}'")]
    InvalidCurrency(String),

    #[error("Free tier label must not be empty")]
    EmptyFreeLabel,

    #[error("Submission timeout must be between 1 and 120 seconds")]
    InvalidTimeout,

    #[error("Submission attempts must be between 1 and 10")]
    InvalidMaxAttempts,

    #[error("Submission retry backoff must be at most 30000 milliseconds")]
    InvalidRetryBackoff,

    #[error("Invalid submission endpoint URL")]
    InvalidEndpoint,

    #[error("Submission endpoint must use http or https")]
    UnsupportedEndpointScheme,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
