//! Name field.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use std::fmt;

/// Minimum number of characters in a name, ignoring surrounding whitespace.
pub const MIN_NAME_CHARS: usize = 2;

/// Rule for contact names.
///
/// # Validation Rules
///
/// - Surrounding whitespace is trimmed before the name is stored
/// - Must contain at least [`MIN_NAME_CHARS`] characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;
    const LABEL: &'static str = "name";

    fn normalize(value: String) -> String {
        value.trim().to_string()
    }

    fn validate(value: &String) -> Result<(), ValidationError> {
        if value.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort(value.clone()));
        }
        Ok(())
    }
}

/// A contact's name.
pub type Name = ValidatedField<NameRule>;

impl Name {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
