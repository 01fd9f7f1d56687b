//! Data models for the contact book.
//!
//! This module contains the record representing one contact, the closed set
//! of fields a record can carry, and the address book that stores records
//! by name.

pub mod address_book;
pub mod field;
pub mod record;

pub use address_book::AddressBook;
pub use field::{Field, FieldValue};
pub use record::Record;
