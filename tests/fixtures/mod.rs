//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable constructors for dates, contacts and
//! pre-filled address books.

use chrono::NaiveDate;
use contact_book::{AddressBook, Birthday, Name, Phone, Record};

/// Build a date, panicking on an impossible one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a record with just a name.
pub fn contact(name: &str) -> Record {
    Record::new(Name::new(name).unwrap())
}

/// Create a record with a single phone number and a birthday.
pub fn full_contact(name: &str, number: &str, birthday: NaiveDate) -> Record {
    Record::with_fields(
        Name::new(name).unwrap(),
        Some(Phone::from_number(number).unwrap()),
        Some(Birthday::new(birthday).unwrap()),
    )
}

/// Create an address book holding name-only records, in the given order.
#[allow(dead_code)]
pub fn book_of(names: &[&str]) -> AddressBook {
    names.iter().map(|name| contact(name)).collect()
}

/// Collect the names of a slice of records.
#[allow(dead_code)]
pub fn names_of(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.name().as_str().to_string())
        .collect()
}
