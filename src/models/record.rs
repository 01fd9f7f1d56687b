//! Record model representing one contact in the address book.

use super::field::{Field, FieldValue};
use crate::domain::{Birthday, BirthdayRule, FieldRule, LeapDayPolicy, Name, Phone, PhoneRule};
use crate::error::{ContactBookError, ContactBookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A contact: a fixed name plus optional fields keyed by label.
///
/// At most one field is stored per label, so adding a phone or birthday
/// replaces the previous one. A single [`Phone`] may still hold several
/// numbers.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::{Birthday, Name, Phone};
/// use contact_book::models::Record;
///
/// let record = Record::new(Name::new("Bill").unwrap())
///     .with_phone(Phone::from_number("1234567890").unwrap())
///     .with_birthday(Birthday::parse("1990-08-14").unwrap());
///
/// let today = NaiveDate::from_ymd_opt(2024, 8, 13).unwrap();
/// assert_eq!(record.days_to_next_birthday(today), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordRepr", into = "RecordRepr")]
pub struct Record {
    name: Name,
    optional_fields: BTreeMap<&'static str, Field>,
}

impl Record {
    /// Create a record with only a name.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            optional_fields: BTreeMap::new(),
        }
    }

    /// Create a record with any combination of phone and birthday.
    pub fn with_fields(name: Name, phone: Option<Phone>, birthday: Option<Birthday>) -> Self {
        let mut record = Self::new(name);
        if let Some(phone) = phone {
            record.add_phone(phone);
        }
        if let Some(birthday) = birthday {
            record.add_birthday(birthday);
        }
        record
    }

    /// Builder form of [`Record::add_phone`].
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.add_phone(phone);
        self
    }

    /// Builder form of [`Record::add_birthday`].
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.add_birthday(birthday);
        self
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Store `field` under its label, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::TypeMismatch` for a [`Field::Name`]; the
    /// name is fixed when the record is created.
    pub fn add_field(&mut self, field: Field) -> ContactBookResult<()> {
        match field {
            Field::Name(_) => Err(ContactBookError::TypeMismatch {
                label: field.label().to_string(),
                expected: "phone or birthday",
                found: field.label(),
            }),
            Field::Phone(phone) => {
                self.add_phone(phone);
                Ok(())
            }
            Field::Birthday(birthday) => {
                self.add_birthday(birthday);
                Ok(())
            }
        }
    }

    /// Store a phone field, replacing any previous one.
    pub fn add_phone(&mut self, phone: Phone) {
        self.insert_field(Field::Phone(phone));
    }

    /// Store a birthday field, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.insert_field(Field::Birthday(birthday));
    }

    fn insert_field(&mut self, field: Field) {
        let label = field.label();
        if self.optional_fields.insert(label, field).is_some() {
            tracing::debug!(contact = %self.name, label, "Replaced field");
        }
    }

    /// Remove the field stored under `label`, if any.
    pub fn remove_field(&mut self, label: &str) -> Option<Field> {
        self.optional_fields.remove(label)
    }

    /// Replace the value of the field stored under `label`.
    ///
    /// Does nothing if no field is stored under `label`.
    ///
    /// # Errors
    ///
    /// - `ContactBookError::Validation` if the field rejects the value; the
    ///   old value is kept
    /// - `ContactBookError::TypeMismatch` if `value` is for another kind of field
    pub fn edit_field(&mut self, label: &str, value: FieldValue) -> ContactBookResult<()> {
        match self.optional_fields.get_mut(label) {
            Some(field) => field.set_value(value),
            None => Ok(()),
        }
    }

    /// Get the field stored under `label`.
    pub fn field(&self, label: &str) -> Option<&Field> {
        self.optional_fields.get(label)
    }

    /// Iterate over the optional fields in label order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.optional_fields.values()
    }

    /// The stored phone numbers, if any.
    pub fn phone(&self) -> Option<&Phone> {
        match self.optional_fields.get(PhoneRule::LABEL) {
            Some(Field::Phone(phone)) => Some(phone),
            _ => None,
        }
    }

    /// Mutable access to the stored phone, for adding or removing numbers.
    pub fn phone_mut(&mut self) -> Option<&mut Phone> {
        match self.optional_fields.get_mut(PhoneRule::LABEL) {
            Some(Field::Phone(phone)) => Some(phone),
            _ => None,
        }
    }

    /// Remove one phone number, dropping the phone field with its last number.
    ///
    /// Returns `false` if the record has no such number.
    pub fn remove_phone_number(&mut self, number: &str) -> bool {
        let Some(phone) = self.phone_mut() else {
            return false;
        };
        match phone.remove_number(number) {
            Ok(removed) => removed,
            Err(_) => {
                self.optional_fields.remove(PhoneRule::LABEL);
                tracing::debug!(contact = %self.name, "Removed last phone number");
                true
            }
        }
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        match self.optional_fields.get(BirthdayRule::LABEL) {
            Some(Field::Birthday(birthday)) => Some(birthday),
            _ => None,
        }
    }

    /// Days from `today` to the next birthday, or `None` without a birthday.
    ///
    /// Feb 29 birthdays fall on Mar 1 in common years; see
    /// [`Record::days_to_next_birthday_with`] to choose otherwise.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.days_to_next_birthday_with(today, LeapDayPolicy::default())
    }

    /// Days from `today` to the next birthday under the given leap-day policy.
    pub fn days_to_next_birthday_with(
        &self,
        today: NaiveDate,
        policy: LeapDayPolicy,
    ) -> Option<i64> {
        self.birthday()?.days_until(today, policy)
    }

    /// Days to the next birthday counted from the local system date.
    pub fn days_to_next_birthday_from_now(&self) -> Option<i64> {
        self.days_to_next_birthday(Local::now().date_naive())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for field in self.fields() {
            write!(f, "; {}", field)?;
        }
        Ok(())
    }
}

/// Serialized shape of a record.
#[derive(Serialize, Deserialize)]
struct RecordRepr {
    name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl From<RecordRepr> for Record {
    fn from(repr: RecordRepr) -> Self {
        Record::with_fields(repr.name, repr.phone, repr.birthday)
    }
}

impl From<Record> for RecordRepr {
    fn from(record: Record) -> Self {
        Self {
            phone: record.phone().cloned(),
            birthday: record.birthday().cloned(),
            name: record.name,
        }
    }
}
