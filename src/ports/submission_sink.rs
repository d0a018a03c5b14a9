//! Submission sink port.
//!
//! Receives the immutable registration payload once the wizard has passed
//! local validation. Any `Ok` return counts as accepted; an `Err` moves the
//! wizard into its recoverable `SubmissionFailed` step.
//!
//! # Example
//!
//! ```ignore
//! let payload = wizard.pending_payload().cloned().unwrap();
//! sink.submit(&payload).await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::registration::SubmissionPayload;

/// Why a sink refused or failed to take a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The receiving service answered but did not accept the payload.
    #[error("Submission rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The payload never reached the receiving service.
    #[error("Submission transport failed: {0}")]
    Transport(String),

    /// The payload could not be encoded.
    #[error("Submission could not be encoded: {0}")]
    Encoding(String),

    /// The sink is not configured or deliberately offline.
    #[error("Submission sink unavailable: {0}")]
    Unavailable(String),
}

impl SubmissionError {
    /// Returns true if sending the same payload again may succeed.
    ///
    /// Server-side 5xx and 429 answers are worth retrying; other rejections are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmissionError::Rejected { status, .. } => *status >= 500 || *status == 429,
            SubmissionError::Transport(_) | SubmissionError::Unavailable(_) => true,
            SubmissionError::Encoding(_) => false,
        }
    }
}

/// Port for handing a finished registration to the host application.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one payload. Implementations must be safe to call again with
    /// the same payload (the `registration_id` is the idempotency key).
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}
