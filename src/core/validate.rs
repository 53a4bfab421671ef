// ============================================================================
// chore-list - Input Validation
// Caller-side normalization of raw chore text
// ============================================================================
//
// The list wraps whatever it is given. Applications that accept user input
// run it through here first.
// ============================================================================

use super::constants::MAX_TEXT_LEN;
use super::error::ValidationError;

/// Trim `raw` and check it is a usable chore.
///
/// Rejects input that is empty after trimming or longer than
/// [`MAX_TEXT_LEN`] characters.
///
/// # Example
///
/// ```
/// use chore_list::{validate_text, ValidationError};
///
/// assert_eq!(validate_text("  sweep  ").unwrap(), "sweep");
/// assert_eq!(validate_text("   "), Err(ValidationError::Empty));
/// ```
pub fn validate_text(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            len,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_text("\t wash dishes \n").unwrap(), "wash dishes");
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(validate_text(""), Err(ValidationError::Empty));
        assert_eq!(validate_text(" \t "), Err(ValidationError::Empty));
    }

    #[test]
    fn length_limit_counts_characters() {
        let at_limit = "é".repeat(MAX_TEXT_LEN);
        assert_eq!(validate_text(&at_limit).unwrap(), at_limit);

        let over = "x".repeat(MAX_TEXT_LEN + 1);
        assert_eq!(
            validate_text(&over),
            Err(ValidationError::TooLong {
                len: MAX_TEXT_LEN + 1,
                max: MAX_TEXT_LEN
            })
        );
    }

    #[test]
    fn limit_applies_after_trimming() {
        let padded = format!("  {}  ", "y".repeat(MAX_TEXT_LEN));
        assert!(validate_text(&padded).is_ok());
    }
}
