//! Prompt template validation.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a template name.
pub const MAX_TEMPLATE_NAME_LEN: usize = 200;

/// Maximum length for a template description.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a template name: non-blank and within length limit.
pub fn validate_template_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Template name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_TEMPLATE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Template name too long: {} chars (max {MAX_TEMPLATE_NAME_LEN})",
            name.chars().count()
        )));
    }
    Ok(())
}

/// Validate an optional description against the length limit.
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    match description {
        Some(d) if d.chars().count() > MAX_DESCRIPTION_LEN => Err(CoreError::Validation(format!(
            "Description too long: {} chars (max {MAX_DESCRIPTION_LEN})",
            d.chars().count()
        ))),
        _ => Ok(()),
    }
}
