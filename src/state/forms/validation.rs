//! Field validation rules

use super::field::FieldValue;
use thiserror::Error;

/// A single validation rule attached to a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Value must be present (non-empty text, any selected level)
    Required,
    /// Text must have at least this many characters. Length is counted in
    /// `char`s (Unicode scalar values), not UTF-16 code units, so `"🙂🙂"`
    /// has length 2. Empty text passes; pair with `Required` to reject it.
    MinLength(usize),
}

/// A failed validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is required")]
    Required,
    #[error("expected at least {required} characters, got {actual}")]
    MinLength { required: usize, actual: usize },
}

impl Validator {
    /// Check a value against this rule
    pub fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match (self, value) {
            (Validator::Required, FieldValue::Text(s)) if s.is_empty() => {
                Err(ValidationError::Required)
            }
            (Validator::Required, _) => Ok(()),
            (Validator::MinLength(required), FieldValue::Text(s)) => {
                let actual = s.chars().count();
                if actual > 0 && actual < *required {
                    Err(ValidationError::MinLength {
                        required: *required,
                        actual,
                    })
                } else {
                    Ok(())
                }
            }
            (Validator::MinLength(_), FieldValue::Level(_)) => Ok(()),
        }
    }
}

/// Run every rule and collect the failures, in rule order
pub fn validate(value: &FieldValue, validators: &[Validator]) -> Vec<ValidationError> {
    validators
        .iter()
        .filter_map(|v| v.check(value).err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Level;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_required_rejects_empty_text() {
        assert_eq!(
            Validator::Required.check(&text("")),
            Err(ValidationError::Required)
        );
        assert_eq!(Validator::Required.check(&text("a")), Ok(()));
    }

    #[test]
    fn test_required_accepts_any_level() {
        for level in Level::ALL {
            assert_eq!(Validator::Required.check(&FieldValue::Level(level)), Ok(()));
        }
    }

    #[test]
    fn test_min_length_skips_empty() {
        assert_eq!(Validator::MinLength(3).check(&text("")), Ok(()));
    }

    #[test]
    fn test_min_length_boundary() {
        assert_eq!(
            Validator::MinLength(3).check(&text("Al")),
            Err(ValidationError::MinLength {
                required: 3,
                actual: 2
            })
        );
        assert_eq!(Validator::MinLength(3).check(&text("Ali")), Ok(()));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // three chars, six bytes
        assert_eq!(Validator::MinLength(3).check(&text("éèê")), Ok(()));
    }

    #[test]
    fn test_min_length_counts_emoji_as_one_char() {
        // four UTF-16 code units, two chars
        assert_eq!(
            Validator::MinLength(3).check(&text("🙂🙂")),
            Err(ValidationError::MinLength {
                required: 3,
                actual: 2
            })
        );
        assert_eq!(Validator::MinLength(3).check(&text("🙂🙂🙂")), Ok(()));
    }

    #[test]
    fn test_whitespace_counts_toward_length() {
        assert_eq!(Validator::MinLength(3).check(&text("   ")), Ok(()));
    }

    #[test]
    fn test_validate_collects_in_order() {
        let rules = [Validator::Required, Validator::MinLength(5)];
        assert_eq!(validate(&text(""), &rules), vec![ValidationError::Required]);
        assert_eq!(
            validate(&text("Eng"), &rules),
            vec![ValidationError::MinLength {
                required: 5,
                actual: 3
            }]
        );
        assert!(validate(&text("Engineer"), &rules).is_empty());
    }
}
