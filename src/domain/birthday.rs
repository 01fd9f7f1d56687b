//! Birthday field and next-occurrence arithmetic.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Textual format accepted by [`Birthday::parse`].
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// How a Feb 29 birthday is placed in a year without Feb 29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Celebrate on Feb 28.
    Feb28,
    /// Celebrate on Mar 1.
    #[default]
    Mar1,
}

impl LeapDayPolicy {
    /// Place `month`/`day` in `year`, substituting for a missing Feb 29.
    ///
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn resolve(self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                match self {
                    Self::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
                    Self::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
                }
            } else {
                None
            }
        })
    }
}

impl FromStr for LeapDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feb28" => Ok(Self::Feb28),
            "mar1" => Ok(Self::Mar1),
            other => Err(format!("expected \"feb28\" or \"mar1\", got: {}", other)),
        }
    }
}

/// Rule for birthdays. Any calendar date is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = NaiveDate;
    const LABEL: &'static str = "birthday";

    fn validate(_value: &NaiveDate) -> Result<(), ValidationError> {
        // NaiveDate cannot hold an impossible date.
        Ok(())
    }
}

/// A contact's date of birth.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::{Birthday, LeapDayPolicy};
///
/// let birthday = Birthday::parse("1990-08-14").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 8, 13).unwrap();
/// assert_eq!(birthday.days_until(today, LeapDayPolicy::default()), Some(1));
/// ```
pub type Birthday = ValidatedField<BirthdayRule>;

impl Birthday {
    /// Parse a birthday from `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not a date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(text.trim(), BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))?;
        Self::new(date)
    }

    /// Get the stored date.
    pub fn date(&self) -> NaiveDate {
        *self.value()
    }

    /// The first date on or after `today` that falls on this birthday.
    ///
    /// Returns `None` only past the end of chrono's calendar range.
    pub fn next_occurrence(&self, today: NaiveDate, policy: LeapDayPolicy) -> Option<NaiveDate> {
        let (month, day) = (self.date().month(), self.date().day());

        let candidate = policy.resolve(today.year(), month, day)?;
        if candidate < today {
            policy.resolve(today.year() + 1, month, day)
        } else {
            Some(candidate)
        }
    }

    /// Whole days from `today` to the next occurrence; 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate, policy: LeapDayPolicy) -> Option<i64> {
        self.next_occurrence(today, policy)
            .map(|next| (next - today).num_days())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date().format(BIRTHDAY_FORMAT))
    }
}
