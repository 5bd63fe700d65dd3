//! Validation rules for conversation logs.
//!
//! A log row stores the summary of one completed voice session: the child's
//! first name, an optional age, and a newline-delimited bullet summary.
//! Rows are immutable after creation, so all enforcement happens at write
//! time.

use serde::Deserialize;

use crate::error::CoreError;

/// Maximum flattened summary length, in characters.
pub const MAX_SUMMARY_CHARS: usize = 5000;

/// Summary as submitted by the client: either one pre-joined text block or
/// an ordered list of bullet lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SummaryInput {
    Text(String),
    Lines(Vec<String>),
}

impl SummaryInput {
    /// Flatten to the stored representation (lines joined with `\n`).
    pub fn flatten(&self) -> String {
        match self {
            SummaryInput::Text(text) => text.clone(),
            SummaryInput::Lines(lines) => lines.join("\n"),
        }
    }
}

/// Validate a first name for log creation.
pub fn validate_first_name(first_name: &str) -> Result<(), CoreError> {
    if first_name.trim().is_empty() {
        return Err(CoreError::Validation("Voornaam is verplicht".into()));
    }
    Ok(())
}

/// Validate a flattened summary for log creation.
///
/// Empty summaries are rejected; the length cap is counted in characters,
/// not bytes, so multi-byte text is not penalized.
pub fn validate_summary(summary: &str) -> Result<(), CoreError> {
    if summary.trim().is_empty() {
        return Err(CoreError::Validation("Samenvatting is verplicht".into()));
    }
    if summary.chars().count() > MAX_SUMMARY_CHARS {
        return Err(CoreError::Validation(format!(
            "Samenvatting is te lang (max {MAX_SUMMARY_CHARS} tekens)"
        )));
    }
    Ok(())
}
