//! HTTP submission sink.
//!
//! POSTs the payload as JSON to a configured endpoint. The registration id is
//! sent as `Idempotency-Key` so the receiver can drop duplicate deliveries
//! caused by retries.

use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{SubmissionConfig, ValidationError};
use crate::domain::registration::SubmissionPayload;
use crate::ports::{SubmissionError, SubmissionSink};

/// Longest response body echoed back in a rejection message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Configuration for the HTTP sink.
#[derive(Debug, Clone)]
pub struct HttpSubmissionConfig {
    /// Absolute URL receiving the payload.
    pub endpoint: Url,
    /// Bearer token, if the receiver requires one.
    api_token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpSubmissionConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            api_token: None,
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_api_token(mut self, token: Secret<String>) -> Self {
        self.api_token = Some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the sink configuration from application config.
    ///
    /// Returns `None` when no endpoint is configured.
    pub fn from_config(config: &SubmissionConfig) -> Result<Option<Self>, ValidationError> {
        let Some(endpoint) = config.endpoint_url()? else {
            return Ok(None);
        };
        let mut http = Self::new(endpoint).with_timeout(config.timeout());
        if let Some(token) = &config.api_token {
            http = http.with_api_token(token.clone());
        }
        Ok(Some(http))
    }
}

/// Submission sink speaking JSON over HTTP.
pub struct HttpSubmissionSink {
    config: HttpSubmissionConfig,
    client: Client,
}

impl HttpSubmissionSink {
    /// Creates the sink and its HTTP client.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the HTTP client cannot be built
    pub fn new(config: HttpSubmissionConfig) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SubmissionError::Unavailable(format!("HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let body =
            serde_json::to_vec(payload).map_err(|e| SubmissionError::Encoding(e.to_string()))?;

        let mut request = self
            .client
            .post(self.config.endpoint.clone())
            .header("Content-Type", "application/json")
            .header("Idempotency-Key", payload.registration_id.to_string())
            .body(body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SubmissionError::Transport(format!(
                    "timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else if e.is_connect() {
                SubmissionError::Transport(format!("Connection failed: {}", e))
            } else {
                SubmissionError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(
                registration_id = %payload.registration_id,
                status = status.as_u16(),
                "Submission accepted"
            );
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        warn!(
            registration_id = %payload.registration_id,
            status = status.as_u16(),
            "Submission rejected"
        );
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
