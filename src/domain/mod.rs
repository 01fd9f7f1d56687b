//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is built from: names,
//! phone numbers and birthdays. Each is a [`ValidatedField`] whose rule runs
//! at construction and on every assignment, so invalid data cannot be
//! represented in the system.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule, LeapDayPolicy};
pub use errors::ValidationError;
pub use field::{FieldRule, ValidatedField};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule};
