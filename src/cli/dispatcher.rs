use crate::api::client::WebhookClient;
use crate::api::models::{LeadSearchRecord, SubmissionEnvelope};
use crate::cli::interactive;
use crate::cli::main_types::Commands;
use crate::core::controller::{SubmissionController, SubmissionReceipt, WebhookSink};
use crate::core::form::{FormField, SearchForm};
use crate::core::validation::validate_form;
use crate::display::{ProgressSpinner, TableDisplay, render_feedback};
use crate::error::{AppError, CliError};
use crate::utils::logging::VerboseLogger;

pub struct Dispatcher {
    webhook_url: String,
    logger: VerboseLogger,
}

impl Dispatcher {
    pub fn new(webhook_url: String, verbose: bool) -> Self {
        Self {
            webhook_url,
            logger: VerboseLogger::new(verbose),
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Submit {
                business_name,
                location,
                start,
                enable_filters,
                min_reviews,
                min_ratings,
                dry_run,
            } => {
                let mut form = SearchForm::new();
                form.set_value(FormField::BusinessName, business_name);
                form.set_value(FormField::Location, location);
                form.set_value(FormField::StartParam, start);
                if let Some(value) = min_reviews {
                    form.set_value(FormField::MinReviews, value);
                }
                if let Some(value) = min_ratings {
                    form.set_value(FormField::MinRatings, value);
                }
                form.set_filters_enabled(enable_filters);

                if dry_run {
                    self.handle_dry_run(form)
                } else {
                    self.handle_submit(form).await
                }
            }
            Commands::Form => self.handle_form_session().await,
        }
    }

    /// Validate, build the payload, print it, send nothing
    fn handle_dry_run(&self, form: SearchForm) -> Result<(), AppError> {
        self.logger.log("Running dry-run validation");
        let validated = validate_form(&form)?;
        let envelope = SubmissionEnvelope::new(LeadSearchRecord::from(&validated));

        let summary = TableDisplay::new().render_payload_summary(envelope.record());
        println!("{}", summary);
        println!("{}", render_pretty_payload(&envelope)?);
        println!("Dry run: no request sent.");
        Ok(())
    }

    /// One-shot submission from flags
    async fn handle_submit(&self, form: SearchForm) -> Result<(), AppError> {
        let client = WebhookClient::new(self.webhook_url.clone())?;
        let mut controller = SubmissionController::new(form, client);
        self.run_submission(&mut controller).await.map(|_| ())
    }

    /// Interactive loop: prompt, validate with per-field re-prompts,
    /// submit, then offer another round (or a retry after a transport
    /// failure, with the retained values)
    async fn handle_form_session(&self) -> Result<(), AppError> {
        let client = WebhookClient::new(self.webhook_url.clone())?;
        let mut controller = SubmissionController::new(SearchForm::new(), client);

        loop {
            interactive::collect_form(controller.form_mut())?;

            loop {
                match validate_form(controller.form()) {
                    Ok(_) => break,
                    Err(e) => {
                        println!("⚠️ {}", e);
                        interactive::prompt_field(controller.form_mut(), e.field())?;
                    }
                }
            }

            match self.run_submission(&mut controller).await {
                Ok(_) => {
                    // Success reset the form; start over or leave
                    if !interactive::prompt_yes_no("Submit another search", false)? {
                        return Ok(());
                    }
                }
                Err(e @ AppError::Api(_)) => {
                    // The form survived the failure, so a retry reuses it
                    if !interactive::prompt_yes_no("Retry with the same values", true)? {
                        return Err(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Drive one submit attempt with the spinner up for the duration of
    /// the call, then print the resulting feedback line
    async fn run_submission<S: WebhookSink>(
        &self,
        controller: &mut SubmissionController<S>,
    ) -> Result<SubmissionReceipt, AppError> {
        if self.logger.is_enabled() {
            self.log_outgoing_payload(controller.form());
        }

        let mut spinner = ProgressSpinner::new("Sending lead search...".to_string());
        spinner.start();
        let result = controller.submit().await;
        spinner.stop(None);

        render_feedback(controller.feedback());
        result
    }

    /// Verbose diagnostics: the payload about to go out, pretty-printed.
    /// Skipped silently when the form does not validate; the submit path
    /// reports that with a proper message.
    fn log_outgoing_payload(&self, form: &SearchForm) {
        if let Ok(validated) = validate_form(form) {
            let envelope = SubmissionEnvelope::new(LeadSearchRecord::from(&validated));
            if let Ok(pretty) = render_pretty_payload(&envelope) {
                self.logger.log(&format!("Submitting payload:\n{}", pretty));
            }
        }
    }
}

fn render_pretty_payload(envelope: &SubmissionEnvelope) -> Result<String, AppError> {
    serde_json::to_string_pretty(envelope).map_err(|e| {
        AppError::Cli(CliError::InvalidArguments(format!(
            "Failed to render payload: {}",
            e
        )))
    })
}
