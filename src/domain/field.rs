//! Generic validated field.
//!
//! A [`ValidatedField`] pairs a value with a [`FieldRule`] that decides which
//! values are acceptable. The rule runs on construction and on every
//! assignment, so a field can never hold a value its rule rejects.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// The predicate and label shared by every field of one kind.
pub trait FieldRule {
    /// The type of value stored in the field.
    type Value: Clone + fmt::Debug + PartialEq;

    /// Human-readable label the field is stored under inside a record.
    const LABEL: &'static str;

    /// Canonical form of a candidate value, applied before validation.
    fn normalize(value: Self::Value) -> Self::Value {
        value
    }

    /// Check a candidate value.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` describing why the value is rejected.
    fn validate(value: &Self::Value) -> Result<(), ValidationError>;
}

/// A labelled value that is re-validated on every assignment.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let mut name = Name::new("Bill").unwrap();
/// assert!(name.set_value("B").is_err());
/// assert_eq!(name.value(), "Bill");
/// ```
pub struct ValidatedField<R: FieldRule> {
    value: R::Value,
    _rule: PhantomData<R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Create a new field, normalizing and validating the initial value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if the value is rejected.
    pub fn new(value: impl Into<R::Value>) -> Result<Self, ValidationError> {
        let value = R::normalize(value.into());
        R::validate(&value)?;
        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }

    /// Replace the stored value.
    ///
    /// On failure the previous value is kept.
    pub fn set_value(&mut self, value: impl Into<R::Value>) -> Result<(), ValidationError> {
        let value = R::normalize(value.into());
        R::validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Get the current value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> R::Value {
        self.value
    }

    /// Label this field is stored under.
    pub fn label(&self) -> &'static str {
        R::LABEL
    }

    /// Mutable access for rule-specific operations that validate on their own.
    pub(crate) fn value_mut(&mut self) -> &mut R::Value {
        &mut self.value
    }
}

impl<R: FieldRule> Clone for ValidatedField<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R: FieldRule> PartialEq for ValidatedField<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> fmt::Debug for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("label", &R::LABEL)
            .field("value", &self.value)
            .finish()
    }
}

// Serde support - serialize as the bare value
impl<R> Serialize for ValidatedField<R>
where
    R: FieldRule,
    R::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize with validation
impl<'de, R> Deserialize<'de> for ValidatedField<R>
where
    R: FieldRule,
    R::Value: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <R::Value as Deserialize<'de>>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
