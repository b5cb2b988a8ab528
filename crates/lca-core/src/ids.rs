//! Assessment identifier parsing.
//!
//! Assessments are keyed by positive integers. Identifiers that arrive as text
//! (command line, request paths) go through [`parse_assessment_id`]; identifiers
//! that arrive as integers go through [`validate_assessment_id`].

use crate::errors::CoreError;

/// Validate an integer assessment identifier.
///
/// # Errors
///
/// Returns `CoreError::InvalidIdentifier` if `id` is zero or negative.
pub fn validate_assessment_id(id: i64) -> Result<i64, CoreError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(CoreError::InvalidIdentifier(format!(
            "'{id}' is not a positive integer"
        )))
    }
}

/// Parse a textual assessment identifier.
///
/// # Errors
///
/// Returns `CoreError::InvalidIdentifier` if `raw` is empty, non-numeric, or
/// not a positive integer.
pub fn parse_assessment_id(raw: &str) -> Result<i64, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidIdentifier("identifier is missing".into()));
    }
    let id = trimmed
        .parse::<i64>()
        .map_err(|_| CoreError::InvalidIdentifier(format!("'{trimmed}' is not numeric")))?;
    validate_assessment_id(id)
}
