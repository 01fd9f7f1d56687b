//! Configuration management for the contact book demo.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::domain::LeapDayPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of records per batch when walking the book (default: 2)
    pub batch_size: usize,

    /// Where Feb 29 birthdays fall in common years (default: Mar 1)
    pub leap_day_policy: LeapDayPolicy,

    /// How many days ahead counts as an upcoming birthday (default: 7)
    pub upcoming_days: u32,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_BATCH_SIZE`: Records per batch, at least 1 (default: 2)
    /// - `CONTACT_BOOK_LEAP_DAY`: `mar1` or `feb28` (default: `mar1`)
    /// - `CONTACT_BOOK_UPCOMING_DAYS`: Upcoming birthday window (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let batch_size = Self::parse_env_usize("CONTACT_BOOK_BATCH_SIZE", defaults.batch_size)?;
        if batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_BATCH_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let leap_day_policy = match env::var("CONTACT_BOOK_LEAP_DAY") {
            Ok(val) => val
                .parse::<LeapDayPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_LEAP_DAY".to_string(),
                    reason,
                })?,
            Err(_) => defaults.leap_day_policy,
        };

        let upcoming_days =
            Self::parse_env_u32("CONTACT_BOOK_UPCOMING_DAYS", defaults.upcoming_days)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            batch_size,
            leap_day_policy,
            upcoming_days,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            batch_size: 2,
            leap_day_policy: LeapDayPolicy::Mar1,
            upcoming_days: 7,
            log_level: "info".to_string(),
        }
    }
}
