//! Submission orchestration: validate → build payload → deliver
//!
//! The controller owns the form and the feedback state. On success the
//! form is reset (and the filter panel re-synced); on transport failure
//! it is left untouched so the user can retry without re-entering data.

use crate::api::models::{LeadSearchRecord, SubmissionEnvelope};
use crate::core::form::SearchForm;
use crate::core::gate::SubmissionGate;
use crate::core::validation::validate_form;
use crate::error::{ApiError, AppError};
use crate::utils::logging::log_error;
use async_trait::async_trait;

/// Outcome of one delivered submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub http_status: u16,
}

/// User-visible state of the last submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackState {
    Idle,
    Loading,
    Success,
    Error,
}

/// Delivery seam for the webhook endpoint, so the controller can be
/// exercised against an in-memory sink
#[async_trait]
pub trait WebhookSink {
    async fn deliver(&self, envelope: &SubmissionEnvelope) -> Result<SubmissionReceipt, ApiError>;
}

pub struct SubmissionController<S> {
    form: SearchForm,
    sink: S,
    gate: SubmissionGate,
    feedback: FeedbackState,
}

impl<S: WebhookSink> SubmissionController<S> {
    pub fn new(form: SearchForm, sink: S) -> Self {
        Self {
            form,
            sink,
            gate: SubmissionGate::new(),
            feedback: FeedbackState::Idle,
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    pub fn feedback(&self) -> FeedbackState {
        self.feedback
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }

    /// Run one submit attempt end to end.
    ///
    /// Validation failures abort before the gate is touched and before any
    /// payload exists. The gate permit is released on every exit path.
    pub async fn submit(&mut self) -> Result<SubmissionReceipt, AppError> {
        // Clear previous feedback, as the browser cleared its result message
        self.feedback = FeedbackState::Idle;

        let validated = validate_form(&self.form)?;

        let permit = self.gate.try_acquire()?;
        self.feedback = FeedbackState::Loading;

        let envelope = SubmissionEnvelope::new(LeadSearchRecord::from(&validated));
        let outcome = self.sink.deliver(&envelope).await;
        drop(permit);

        match outcome {
            Ok(receipt) => {
                self.form.reset();
                self.feedback = FeedbackState::Success;
                Ok(receipt)
            }
            Err(e) => {
                log_error(&format!("webhook delivery failed: {}", e));
                self.feedback = FeedbackState::Error;
                Err(AppError::Api(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::FormField;
    use std::sync::Mutex;

    /// In-memory sink recording every envelope it is handed
    struct MemorySink {
        delivered: Mutex<Vec<String>>,
        response: Result<u16, u16>,
    }

    impl MemorySink {
        fn responding(status: u16) -> Self {
            Self {
                delivered: Mutex::new(Vec::new()),
                response: Ok(status),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                delivered: Mutex::new(Vec::new()),
                response: Err(status),
            }
        }

        fn delivered_bodies(&self) -> Vec<String> {
            self.delivered.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WebhookSink for &MemorySink {
        async fn deliver(
            &self,
            envelope: &SubmissionEnvelope,
        ) -> Result<SubmissionReceipt, ApiError> {
            self.delivered
                .lock()
                .unwrap()
                .push(serde_json::to_string(envelope).unwrap());
            match self.response {
                Ok(status) => Ok(SubmissionReceipt {
                    http_status: status,
                }),
                Err(status) => Err(ApiError::Http {
                    status,
                    endpoint: "memory".to_string(),
                }),
            }
        }
    }

    fn valid_form() -> SearchForm {
        let mut form = SearchForm::new();
        form.set_value(FormField::BusinessName, "Cafes, Bakeries".to_string());
        form.set_value(FormField::Location, "Lahore".to_string());
        form.set_value(FormField::StartParam, "20".to_string());
        form
    }

    #[tokio::test]
    async fn test_successful_submit_resets_form_and_reports_success() {
        let sink = MemorySink::responding(200);
        let mut controller = SubmissionController::new(valid_form(), &sink);

        let receipt = controller.submit().await.expect("submit should succeed");
        assert_eq!(receipt.http_status, 200);
        assert_eq!(controller.feedback(), FeedbackState::Success);
        assert_eq!(controller.form(), &SearchForm::new());
        assert!(!controller.gate().is_submitting());

        let bodies = sink.delivered_bodies();
        assert_eq!(bodies.len(), 1);
        assert!(bodies[0].starts_with('['), "envelope must be an array");
        assert!(bodies[0].contains("\"Start\":20"));
    }

    #[tokio::test]
    async fn test_failed_submit_retains_form_and_reports_error() {
        let sink = MemorySink::failing(500);
        let form = valid_form();
        let mut controller = SubmissionController::new(form.clone(), &sink);

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, AppError::Api(ApiError::Http { status: 500, .. })));
        assert_eq!(controller.feedback(), FeedbackState::Error);
        assert_eq!(controller.form(), &form, "form must survive a failure");
        assert!(!controller.gate().is_submitting(), "gate must be released");
    }

    #[tokio::test]
    async fn test_validation_failure_never_reaches_the_sink() {
        let sink = MemorySink::responding(200);
        let mut form = valid_form();
        form.set_value(FormField::StartParam, "15".to_string());
        let mut controller = SubmissionController::new(form, &sink);

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(controller.feedback(), FeedbackState::Idle);
        assert!(sink.delivered_bodies().is_empty());
        assert!(!controller.gate().is_submitting());
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_clears_error_feedback() {
        let sink = MemorySink::failing(502);
        let mut controller = SubmissionController::new(valid_form(), &sink);
        let _ = controller.submit().await;
        assert_eq!(controller.feedback(), FeedbackState::Error);

        // A new attempt with a validation problem re-enters Idle
        controller
            .form_mut()
            .set_value(FormField::StartParam, "15".to_string());
        let _ = controller.submit().await;
        assert_eq!(controller.feedback(), FeedbackState::Idle);
    }

    #[tokio::test]
    async fn test_submit_while_gate_held_is_rejected() {
        let sink = MemorySink::responding(200);
        let mut controller = SubmissionController::new(valid_form(), &sink);

        let gate = controller.gate().clone();
        let permit = gate.try_acquire().unwrap();

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Cli(crate::error::CliError::SubmissionInFlight)
        ));
        assert!(sink.delivered_bodies().is_empty());

        drop(permit);
        assert!(controller.submit().await.is_ok());
    }

    #[tokio::test]
    async fn test_disabled_filters_payload_has_no_filter_keys() {
        let sink = MemorySink::responding(200);
        let mut form = valid_form();
        form.set_filters_enabled(true);
        form.set_value(FormField::MinReviews, "10".to_string());
        form.set_value(FormField::MinRatings, "4.5".to_string());
        form.set_filters_enabled(false);

        let mut controller = SubmissionController::new(form, &sink);
        controller.submit().await.unwrap();

        let body = &sink.delivered_bodies()[0];
        assert!(!body.contains("min_reviews"));
        assert!(!body.contains("min_ratings"));
    }
}
