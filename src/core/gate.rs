//! Explicit idle/submitting semaphore guarding the webhook call
//!
//! Stands in for the browser pattern of disabling the submit button while
//! a request is in flight. The permit releases the gate when dropped, so
//! every exit path re-opens it.

use crate::error::CliError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    submitting: Arc<AtomicBool>,
}

/// Held for the duration of one submission
pub struct SubmissionPermit {
    submitting: Arc<AtomicBool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Relaxed)
    }

    /// Acquire the gate, or fail if a submission is already in flight
    pub fn try_acquire(&self) -> Result<SubmissionPermit, CliError> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(CliError::SubmissionInFlight);
        }

        Ok(SubmissionPermit {
            submitting: Arc::clone(&self.submitting),
        })
    }
}

impl Drop for SubmissionPermit {
    fn drop(&mut self) {
        self.submitting.store(false, Ordering::Release);
    }
}
