//! Validation helpers shared by catalogue entities.

use super::CatalogueValidationError;
use crate::domain::slug::{SLUG_MAX_LEN, is_valid_slug};

/// Trim `value` and require it to be non-empty and at most `max` characters.
pub(super) fn validate_name(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, CatalogueValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    ensure_max_chars(trimmed, field, max)?;
    Ok(trimmed.to_owned())
}

pub(super) fn validate_slug(
    value: &str,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    if value.is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    ensure_max_chars(value, field, SLUG_MAX_LEN)?;
    if !is_valid_slug(value) {
        return Err(CatalogueValidationError::InvalidSlug { field });
    }
    Ok(value.to_owned())
}

pub(super) fn ensure_max_chars(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<(), CatalogueValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(CatalogueValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
