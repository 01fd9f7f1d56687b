//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// A field rejected the value it was given
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A caller passed an argument outside the operation's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field or value of the wrong kind was supplied for a label
    #[error("Type mismatch for {label}: expected {expected}, got {found}")]
    TypeMismatch {
        label: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
