//! Pre-network validation of the search form
//!
//! Rules run in a fixed order and short-circuit on the first failure, so
//! the user is always pointed at exactly one field. No payload is built
//! and no request is sent unless every rule passes.

use crate::core::form::{FormField, SearchForm};
use crate::error::ValidationError;
use crate::utils::text::split_list_field;

/// A validated snapshot of the form, built fresh on every submit attempt.
///
/// Invariants held by construction: `start` is a non-negative multiple of
/// 20; `min_reviews`/`min_ratings` are `Some` exactly when
/// `include_filters` is true; `min_ratings` lies in [1, 5].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSearch {
    pub business_types: Vec<String>,
    pub location: String,
    pub include_filters: bool,
    pub start: u64,
    pub min_reviews: Option<u32>,
    pub min_ratings: Option<f64>,
}

/// Validate the current form values and produce the submission snapshot.
pub fn validate_form(form: &SearchForm) -> Result<ValidatedSearch, ValidationError> {
    check_required_fields(form)?;
    let start = check_start(form.start())?;

    let include_filters = form.filters_enabled();
    let (min_reviews, min_ratings) = if include_filters {
        let ratings = check_min_ratings(form.min_ratings())?;
        let reviews = check_min_reviews(form.min_reviews())?;
        (Some(reviews), Some(ratings))
    } else {
        // Hidden filter values may be stale garbage; they are ignored,
        // not validated, and never reach the payload.
        (None, None)
    };

    Ok(ValidatedSearch {
        business_types: split_list_field(form.business_name()),
        location: form.location().to_string(),
        include_filters,
        start,
        min_reviews,
        min_ratings,
    })
}

/// Required-field layer. Filter fields are required only while the
/// filter panel is visible.
fn check_required_fields(form: &SearchForm) -> Result<(), ValidationError> {
    let mut required = vec![FormField::BusinessName, FormField::Location];
    if form.filter_panel().filters_required() {
        required.push(FormField::MinReviews);
        required.push(FormField::MinRatings);
    }

    for field in required {
        if form.value(field).trim().is_empty() {
            return Err(ValidationError::RequiredField { field });
        }
    }
    Ok(())
}

/// `start` must be a non-negative integer divisible by 20 (0 counts)
fn check_start(raw: &str) -> Result<u64, ValidationError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::StartNotMultipleOfTwenty)?;
    if value < 0 {
        return Err(ValidationError::StartNegative);
    }
    if value % 20 != 0 {
        return Err(ValidationError::StartNotMultipleOfTwenty);
    }
    Ok(value as u64)
}

/// `min_ratings` must be a number in the closed interval [1, 5].
/// NaN fails the interval check, as do the infinities.
fn check_min_ratings(raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::RatingOutOfRange)?;
    if !(1.0..=5.0).contains(&value) {
        return Err(ValidationError::RatingOutOfRange);
    }
    Ok(value)
}

/// `min_reviews` must be a whole number, 0 or greater. Fractions and
/// negatives are rejected outright rather than coerced.
fn check_min_reviews(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::ReviewsNotWholeNumber)
}
