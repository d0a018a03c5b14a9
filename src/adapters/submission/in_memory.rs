//! In-memory submission sink for tests and offline demos.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Do not use in production.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::registration::SubmissionPayload;
use crate::ports::{SubmissionError, SubmissionSink};

/// Records accepted payloads; failures can be scripted ahead of time.
///
/// # Example
///
/// ```ignore
/// let sink = InMemorySubmissionSink::new();
/// sink.fail_next(SubmissionError::Transport("offline".into()));
///
/// assert!(sink.submit(&payload).await.is_err());
/// assert!(sink.submit(&payload).await.is_ok());
/// assert_eq!(sink.submissions().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySubmissionSink {
    accepted: Mutex<Vec<SubmissionPayload>>,
    scripted_failures: Mutex<VecDeque<SubmissionError>>,
    attempts: Mutex<usize>,
}

impl InMemorySubmissionSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an error returned by the next call to `submit`.
    pub fn fail_next(&self, error: SubmissionError) {
        self.scripted_failures
            .lock()
            .expect("InMemorySubmissionSink: failures lock poisoned")
            .push_back(error);
    }

    // === Test Helpers ===

    /// Payloads accepted so far, in order.
    pub fn submissions(&self) -> Vec<SubmissionPayload> {
        self.accepted
            .lock()
            .expect("InMemorySubmissionSink: accepted lock poisoned")
            .clone()
    }

    /// Number of `submit` calls, failed ones included.
    pub fn attempts(&self) -> usize {
        *self
            .attempts
            .lock()
            .expect("InMemorySubmissionSink: attempts lock poisoned")
    }
}

#[async_trait]
impl SubmissionSink for InMemorySubmissionSink {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        *self
            .attempts
            .lock()
            .expect("InMemorySubmissionSink: attempts lock poisoned") += 1;

        let scripted = self
            .scripted_failures
            .lock()
            .expect("InMemorySubmissionSink: failures lock poisoned")
            .pop_front();
        if let Some(error) = scripted {
            return Err(error);
        }

        self.accepted
            .lock()
            .expect("InMemorySubmissionSink: accepted lock poisoned")
            .push(payload.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RegistrationId, Timestamp};
    use crate::domain::pricing::RegistrationMode;
    use crate::domain::registration::PersonalInfo;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            registration_id: RegistrationId::new(),
            mode: RegistrationMode::Counter,
            participant_id: None,
            personal_info: PersonalInfo::default(),
            selections: vec![],
            retained_activity_ids: vec![],
            payment_method: None,
            mobile_money_network: None,
            total_price: 0,
            currency: "XOF".to_string(),
            submitted_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn records_accepted_payloads() {
        let sink = InMemorySubmissionSink::new();
        let p = payload();
        sink.submit(&p).await.unwrap();
        assert_eq!(sink.submissions(), vec![p]);
        assert_eq!(sink.attempts(), 1);
    }

    #[tokio::test]
    async fn scripted_failures_are_consumed_in_order() {
        let sink = InMemorySubmissionSink::new();
        sink.fail_next(SubmissionError::Transport("offline".to_string()));
        sink.fail_next(SubmissionError::Unavailable("maintenance".to_string()));

        let p = payload();
        assert_eq!(
            sink.submit(&p).await,
            Err(SubmissionError::Transport("offline".to_string()))
        );
        assert!(matches!(
            sink.submit(&p).await,
            Err(SubmissionError::Unavailable(_))
        ));
        assert!(sink.submit(&p).await.is_ok());
        assert_eq!(sink.attempts(), 3);
        assert_eq!(sink.submissions().len(), 1);
    }
}
