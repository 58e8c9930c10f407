//! Interactive stdin prompting for the `form` session

use crate::core::form::{FormField, SearchForm};
use crate::error::{AppError, CliError};
use std::io::{self, Write};

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| {
        AppError::Cli(CliError::InputRead {
            message: format!("Failed to flush stdout: {}", e),
        })
    })?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(|e| {
        AppError::Cli(CliError::InputRead {
            message: format!("Failed to read input: {}", e),
        })
    })?;
    Ok(line.trim().to_string())
}

/// Prompt for a text field. The current value is offered as the default
/// and kept when the user just presses enter.
pub fn prompt_field(form: &mut SearchForm, field: FormField) -> Result<(), AppError> {
    let current = form.value(field).to_string();
    let prompt = if current.is_empty() {
        format!("{}: ", field.label())
    } else {
        format!("{} [{}]: ", field.label(), current)
    };

    let input = read_line(&prompt)?;
    if !input.is_empty() {
        form.set_value(field, input);
    }
    Ok(())
}

/// Ask a y/n question; enter keeps the default
pub fn prompt_yes_no(label: &str, default: bool) -> Result<bool, AppError> {
    let hint = if default { "Y/n" } else { "y/N" };
    let input = read_line(&format!("{} [{}]: ", label, hint))?;
    Ok(match input.to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}

/// Walk the whole form once: plain fields, the filters question, and the
/// filter fields only when the panel is visible
pub fn collect_form(form: &mut SearchForm) -> Result<(), AppError> {
    prompt_field(form, FormField::BusinessName)?;
    prompt_field(form, FormField::Location)?;
    prompt_field(form, FormField::StartParam)?;

    let enable = prompt_yes_no("Enable filters", form.filters_enabled())?;
    form.set_filters_enabled(enable);

    if form.filter_panel().is_visible() {
        prompt_field(form, FormField::MinReviews)?;
        prompt_field(form, FormField::MinRatings)?;
    }
    Ok(())
}
