use crate::core::form::FormField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("A submission is already in progress")]
    SubmissionInFlight,
    #[error("Input error: {message}")]
    InputRead { message: String },
}

/// Pre-network form validation failures. Each variant carries the field
/// to focus so the adapter can point the user at the offending input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{} is required.", .field.label())]
    RequiredField { field: FormField },
    #[error("Start value must be a multiple of 20 (e.g., 0, 20, 40).")]
    StartNotMultipleOfTwenty,
    #[error("Start value must not be negative.")]
    StartNegative,
    #[error("Minimum Rating must be between 1 and 5.")]
    RatingOutOfRange,
    #[error("Minimum Reviews must be a whole number (0 or greater).")]
    ReviewsNotWholeNumber,
}

impl ValidationError {
    /// The input the user has to fix before resubmitting
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::RequiredField { field } => *field,
            ValidationError::StartNotMultipleOfTwenty | ValidationError::StartNegative => {
                FormField::StartParam
            }
            ValidationError::RatingOutOfRange => FormField::MinRatings,
            ValidationError::ReviewsNotWholeNumber => FormField::MinReviews,
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to create HTTP client: {message}")]
    ClientInit { message: String },
    #[error("Request failed for {endpoint}: {message}")]
    Request { endpoint: String, message: String },
    #[error("HTTP error: {status} from {endpoint}")]
    Http { status: u16, endpoint: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(cli_error) => match cli_error {
                CliError::SubmissionInFlight => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            AppError::Validation(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                ApiError::Request { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Validation(validation_error) => format!("{}", validation_error),
            AppError::Cli(CliError::SubmissionInFlight) => {
                "A submission is already in progress".to_string()
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Validation(validation_error) => {
                let field = validation_error.field();
                Some(format!(
                    "Fix {} ({}) and resubmit",
                    field.label(),
                    field.flag()
                ))
            }
            AppError::Api(_) => Some("Check your internet connection and try again".to_string()),
            AppError::Cli(CliError::SubmissionInFlight) => {
                Some("Wait for the current submission to settle".to_string())
            }
            _ => None,
        }
    }
}
