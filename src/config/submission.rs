//! Submission sink configuration

use reqwest::Url;
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_RETRY_BACKOFF_MS: u64 = 30_000;

/// Submission sink configuration
///
/// Without an `endpoint`, `HttpSubmissionConfig::from_config` yields no HTTP
/// sink and the host wires another one.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Receiving endpoint (absolute http/https URL)
    pub endpoint: Option<String>,

    /// Bearer token sent with each submission
    pub api_token: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Attempts per submission, the first one included
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base delay between attempts in milliseconds (multiplied by the attempt number, at most 30000)
    #[serde(default = "default_retry_backoff")]
    pub retry_backoff_ms: u64,
}

impl SubmissionConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Parsed endpoint, if configured
    pub fn endpoint_url(&self) -> Result<Option<Url>, ValidationError> {
        let Some(raw) = &self.endpoint else {
            return Ok(None);
        };
        let url = Url::parse(raw).map_err(|_| ValidationError::InvalidEndpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(Some(url)),
            _ => Err(ValidationError::UnsupportedEndpointScheme),
        }
    }

    /// Validate submission configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=120).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if !(1..=10).contains(&self.max_attempts) {
            return Err(ValidationError::InvalidMaxAttempts);
        }
        if self.retry_backoff_ms > MAX_RETRY_BACKOFF_MS {
            return Err(ValidationError::InvalidRetryBackoff);
        }
        self.endpoint_url()?;
        Ok(())
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_token: None,
            timeout_secs: default_timeout(),
            max_attempts: default_max_attempts(),
            retry_backoff_ms: default_retry_backoff(),
        }
    }
}

fn default_timeout() -> u64 {
    15
}

fn default_max_attempts() -> u32 {
    1
}

fn default_retry_backoff() -> u64 {
    500
}
