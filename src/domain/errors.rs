//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name has fewer than two visible characters.
    NameTooShort(String),

    /// The provided phone number contains something other than digits.
    InvalidPhone(String),

    /// A phone field was left without any number.
    NoPhoneNumbers,

    /// The provided birthday is not a calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort(name) => write!(f, "name too short: {:?}", name),
            Self::InvalidPhone(phone) => write!(f, "phone must be digits only: {:?}", phone),
            Self::NoPhoneNumbers => write!(f, "phone must hold at least one number"),
            Self::InvalidBirthday(value) => write!(f, "birthday must be a date: {:?}", value),
        }
    }
}

impl std::error::Error for ValidationError {}
