//! Identifier normalization and format validation.
//!
//! An employee identifier is a short token matching `[A-Z0-9-]{3,20}` after
//! normalization. Normalization trims surrounding whitespace and folds to
//! uppercase, so `emp-001` and `EMP-001` compare as the same identifier.

use crate::error::ValidationError;

/// Minimum length of a normalized identifier
pub const MIN_ID_LEN: usize = 3;

/// Maximum length of a normalized identifier
pub const MAX_ID_LEN: usize = 20;

/// Normalize a candidate identifier to its canonical comparison form
#[must_use]
pub fn normalize_id(candidate: &str) -> String {
    candidate.trim().to_uppercase()
}

/// Validate the format of a candidate identifier
///
/// Rules are checked in order (empty, length, character set) and the first
/// violation is reported. Uniqueness is deliberately not checked here; see
/// [`IdRegistry::validate`](crate::registry::IdRegistry::validate).
///
/// # Returns
/// The normalized identifier on success
///
/// # Errors
/// Returns the first violated rule as a [`ValidationError`]
pub fn validate_format(candidate: &str) -> Result<String, ValidationError> {
    let id = normalize_id(candidate);

    if id.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = id.chars().count();
    if len < MIN_ID_LEN {
        return Err(ValidationError::TooShort { len });
    }
    if len > MAX_ID_LEN {
        return Err(ValidationError::TooLong { len });
    }

    if let Some(ch) = id
        .chars()
        .find(|c| !c.is_ascii_uppercase() && !c.is_ascii_digit() && *c != '-')
    {
        return Err(ValidationError::InvalidCharacter { ch });
    }

    Ok(id)
}
