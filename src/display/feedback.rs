//! Feedback message rendering for the result of a submit attempt

use crate::core::controller::FeedbackState;

/// Fixed CRM spreadsheet the webhook writes into; linked from the
/// success message
pub const CRM_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1eKasmLy4L0PTJgaPPCOKBUHT26zRXUXu8YNQ_wrGktI/edit?usp=sharing";

pub fn success_message() -> String {
    format!("Success! Data sent (check CRM: {})", CRM_SHEET_URL)
}

pub fn error_message() -> &'static str {
    "Error sending data."
}

/// Print the feedback line for a settled submit attempt. Idle and
/// Loading produce no output.
pub fn render_feedback(state: FeedbackState) {
    match state {
        FeedbackState::Success => println!("✅ {}", success_message()),
        FeedbackState::Error => println!("❌ {}", error_message()),
        FeedbackState::Idle | FeedbackState::Loading => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message_contains_crm_link() {
        let msg = success_message();
        assert!(msg.starts_with("Success! Data sent"));
        assert!(msg.contains(CRM_SHEET_URL));
    }

    #[test]
    fn test_error_message_is_generic() {
        assert_eq!(error_message(), "Error sending data.");
    }
}
