use crate::core::validation::ValidatedSearch;
use serde::{Deserialize, Serialize};

/// One lead search as the webhook expects it on the wire.
///
/// The start key serializes as `Start` — capitalized, unlike its
/// snake_case siblings — because the receiving endpoint requires that
/// exact casing. The filter keys are omitted entirely when filters are
/// disabled; the endpoint does not want null placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSearchRecord {
    pub business_types: Vec<String>,
    pub location: String,
    pub include_filters: bool,
    #[serde(rename = "Start")]
    pub start: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ratings: Option<f64>,
}

impl From<&ValidatedSearch> for LeadSearchRecord {
    fn from(search: &ValidatedSearch) -> Self {
        Self {
            business_types: search.business_types.clone(),
            location: search.location.clone(),
            include_filters: search.include_filters,
            start: search.start,
            min_reviews: search.min_reviews,
            min_ratings: search.min_ratings,
        }
    }
}

/// The array-of-objects wrapper the endpoint expects, even for a single
/// record. Serializes transparently as a one-element JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionEnvelope {
    records: [LeadSearchRecord; 1],
}

impl SubmissionEnvelope {
    pub fn new(record: LeadSearchRecord) -> Self {
        Self { records: [record] }
    }

    pub fn record(&self) -> &LeadSearchRecord {
        &self.records[0]
    }
}
