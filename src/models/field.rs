//! Closed set of field kinds a record can carry.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{ContactBookError, ContactBookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Any one of the validated fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Field {
    /// The contact's name; only ever held by the record itself.
    Name(Name),
    /// One or more phone numbers.
    Phone(Phone),
    /// Date of birth.
    Birthday(Birthday),
}

impl Field {
    /// Label the field is stored under.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name(name) => name.label(),
            Self::Phone(phone) => phone.label(),
            Self::Birthday(birthday) => birthday.label(),
        }
    }

    /// Replace the field's value, validating it with the field's own rule.
    ///
    /// # Errors
    ///
    /// - `ContactBookError::Validation` if the field rejects the value
    /// - `ContactBookError::TypeMismatch` if the value is for another kind of field
    pub fn set_value(&mut self, value: FieldValue) -> ContactBookResult<()> {
        match (self, value) {
            (Self::Name(name), FieldValue::Name(value)) => name.set_value(value)?,
            (Self::Phone(phone), FieldValue::Phones(value)) => phone.set_value(value)?,
            (Self::Birthday(birthday), FieldValue::Birthday(value)) => birthday.set_value(value)?,
            (field, value) => {
                return Err(ContactBookError::TypeMismatch {
                    label: field.label().to_string(),
                    expected: field.label(),
                    found: value.kind(),
                })
            }
        }
        Ok(())
    }
}

impl From<Name> for Field {
    fn from(name: Name) -> Self {
        Self::Name(name)
    }
}

impl From<Phone> for Field {
    fn from(phone: Phone) -> Self {
        Self::Phone(phone)
    }
}

impl From<Birthday> for Field {
    fn from(birthday: Birthday) -> Self {
        Self::Birthday(birthday)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}: {}", self.label(), name),
            Self::Phone(phone) => write!(f, "{}: {}", self.label(), phone),
            Self::Birthday(birthday) => write!(f, "{}: {}", self.label(), birthday),
        }
    }
}

/// An unvalidated replacement value for [`Field::set_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// New text for a [`Field::Name`].
    Name(String),
    /// Full replacement list for a [`Field::Phone`].
    Phones(Vec<String>),
    /// New date for a [`Field::Birthday`].
    Birthday(NaiveDate),
}

impl FieldValue {
    /// Kind of field this value is meant for.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Phones(_) => "phone",
            Self::Birthday(_) => "birthday",
        }
    }
}
