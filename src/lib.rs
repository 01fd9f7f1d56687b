//! Contact Book - an in-memory address book with validated contact fields.
//!
//! Contacts are built from value objects that check their own invariants:
//! a name of at least two characters, digit-only phone numbers and a
//! calendar-date birthday. Records gather those fields under labels, and the
//! address book stores records by name with whole-book and batched iteration.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (`Name`, `Phone`, `Birthday`) and birthday arithmetic
//! - **models**: `Record`, the `Field` variants it stores, and `AddressBook`
//! - **error**: Crate-level error types
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Birthday, LeapDayPolicy, Name, Phone, ValidationError};
pub use error::{ConfigError, ContactBookError, ContactBookResult};
pub use models::{AddressBook, Field, FieldValue, Record};
