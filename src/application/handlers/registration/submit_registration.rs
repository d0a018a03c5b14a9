//! SubmitRegistrationHandler - Delivers a wizard's pending payload.
//!
//! The wizard must be on `Submitting`. Retryable sink errors are retried with
//! linear backoff up to the configured attempt count; the final answer is
//! recorded on the wizard (`Completed` or `SubmissionFailed`).

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::SubmissionConfig;
use crate::domain::foundation::RegistrationId;
use crate::domain::registration::{RegistrationError, RegistrationWizard, WizardStep};
use crate::ports::{SubmissionError, SubmissionSink};

/// Retry policy for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    /// Attempts including the first one; at least 1.
    pub max_attempts: u32,
    /// Delay before attempt `n + 1` is `retry_backoff * n`.
    pub retry_backoff: Duration,
}

impl SubmissionPolicy {
    /// A single attempt, no retry.
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            retry_backoff: Duration::ZERO,
        }
    }

    pub fn with_retries(max_attempts: u32, retry_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            retry_backoff,
        }
    }
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self::once()
    }
}

impl From<&SubmissionConfig> for SubmissionPolicy {
    fn from(config: &SubmissionConfig) -> Self {
        Self::with_retries(config.max_attempts, config.retry_backoff())
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRegistrationResult {
    pub registration_id: RegistrationId,
    pub total_price: u64,
    /// Sink calls made, the successful one included.
    pub attempts: u32,
}

/// Handler for submitting registrations.
pub struct SubmitRegistrationHandler {
    sink: Arc<dyn SubmissionSink>,
    policy: SubmissionPolicy,
}

impl SubmitRegistrationHandler {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            sink,
            policy: SubmissionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Delivers the wizard's pending payload.
    ///
    /// # Errors
    ///
    /// - `InvalidStep` if the wizard is not on `Submitting`
    /// - `SubmissionFailed` once the sink has refused for the last time; the
    ///   wizard is then on `SubmissionFailed`
    pub async fn handle(
        &self,
        wizard: &mut RegistrationWizard,
    ) -> Result<SubmitRegistrationResult, RegistrationError> {
        if wizard.step() != WizardStep::Submitting {
            return Err(RegistrationError::invalid_step(
                wizard.step(),
                "submit the registration",
            ));
        }
        let payload = wizard
            .pending_payload()
            .cloned()
            .ok_or_else(|| RegistrationError::infrastructure("no pending payload while submitting"))?;

        let mut attempt = 1;
        let failure: SubmissionError = loop {
            match self.sink.submit(&payload).await {
                Ok(()) => {
                    wizard.record_submission_success()?;
                    info!(
                        registration_id = %payload.registration_id,
                        attempts = attempt,
                        "Registration submitted"
                    );
                    return Ok(SubmitRegistrationResult {
                        registration_id: payload.registration_id,
                        total_price: payload.total_price,
                        attempts: attempt,
                    });
                }
                Err(err) if err.is_retryable() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.retry_backoff * attempt;
                    warn!(
                        registration_id = %payload.registration_id,
                        attempt,
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        "Submission attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => break err,
            }
        };

        error!(
            registration_id = %payload.registration_id,
            attempts = attempt,
            error = %failure,
            "Registration submission failed"
        );
        wizard.record_submission_failure(failure.clone())?;
        Err(RegistrationError::SubmissionFailed(failure))
    }
}
