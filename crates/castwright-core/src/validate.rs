//! Required-field checks shared by every handler

use crate::ApiError;

/// Trimmed value of a field, or `None` when absent or blank
pub fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Check that every named field is present
///
/// On failure the message names all missing fields in order, e.g.
/// `Topic is required` or `Topic and script are required`.
pub fn require(fields: &[(&str, Option<&str>)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(ApiError::Validation(missing_message(&missing)))
}

/// Require one field and return its trimmed value
pub fn required<'a>(name: &str, value: Option<&'a String>) -> Result<&'a str, ApiError> {
    present(value).ok_or_else(|| ApiError::Validation(missing_message(&[name])))
}

fn missing_message(missing: &[&str]) -> String {
    let names = match missing {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    };

    let mut chars = names.chars();
    let capitalised: String = chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default();

    let verb = if missing.len() == 1 { "is" } else { "are" };
    format!("{capitalised} {verb} required")
}
