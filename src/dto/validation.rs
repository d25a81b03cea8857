//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a text field still has content once surrounding whitespace is trimmed.
///
/// # Examples
///
/// ```ignore
/// validate_not_blank("Hollow Knight") // Ok
/// validate_not_blank("   ")           // Err - whitespace only
/// validate_not_blank("")              // Err - empty
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("field is required and must not be blank".into());
        return Err(err);
    }

    Ok(())
}
