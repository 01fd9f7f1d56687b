//! Phone field.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use std::fmt;

/// Rule for a contact's phone numbers.
///
/// # Validation Rules
///
/// - At least one number must be stored
/// - Every number must be non-empty
/// - Every character must be an ASCII digit (`0`-`9`)
///
/// There is no length bound and no country-code normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl PhoneRule {
    fn check_number(number: &str) -> Result<(), ValidationError> {
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(number.to_string()));
        }
        Ok(())
    }
}

impl FieldRule for PhoneRule {
    type Value = Vec<String>;
    const LABEL: &'static str = "phone";

    fn validate(value: &Vec<String>) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::NoPhoneNumbers);
        }
        value.iter().try_for_each(|number| Self::check_number(number))
    }
}

/// The phone numbers of one contact.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let mut phone = Phone::from_number("1234567890").unwrap();
/// phone.add_number("0987654321").unwrap();
/// assert_eq!(phone.numbers().len(), 2);
/// assert!(phone.add_number("+380").is_err());
/// ```
pub type Phone = ValidatedField<PhoneRule>;

impl Phone {
    /// Create a phone field holding a single number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is not digits only.
    pub fn from_number(number: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(vec![number.into()])
    }

    /// Append a number. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is not digits only.
    pub fn add_number(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let number = number.into();
        PhoneRule::check_number(&number)?;
        self.value_mut().push(number);
        Ok(())
    }

    /// Remove the first occurrence of `number`.
    ///
    /// Returns `Ok(false)` if the number was not stored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoPhoneNumbers` if `number` is the only one
    /// left; the phone is unchanged. Drop the whole field instead, as
    /// `Record::remove_phone_number` does.
    pub fn remove_number(&mut self, number: &str) -> Result<bool, ValidationError> {
        let Some(index) = self.numbers().iter().position(|n| n == number) else {
            return Ok(false);
        };
        if self.numbers().len() == 1 {
            return Err(ValidationError::NoPhoneNumbers);
        }
        self.value_mut().remove(index);
        Ok(true)
    }

    /// Get the stored numbers in insertion order.
    pub fn numbers(&self) -> &[String] {
        self.value()
    }

    /// Check whether `number` is stored.
    pub fn contains(&self, number: &str) -> bool {
        self.numbers().iter().any(|n| n == number)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numbers().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::from_number("1234567890").unwrap();
        assert_eq!(phone.numbers(), ["1234567890"]);
        assert_eq!(phone.label(), "phone");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::from_number("").is_err());
        assert!(Phone::from_number("no digits").is_err());
        assert!(Phone::from_number("123-456-7890").is_err());
        assert!(Phone::from_number("+14155551234").is_err());
        assert!(Phone::from_number("555 1234").is_err());
        assert!(Phone::from_number("0").is_ok());
        assert!(Phone::from_number("00380501234567").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not 0-9.
        assert!(Phone::from_number("١٢٣").is_err());
    }

    #[test]
    fn test_phone_set_value_rejects_any_bad_number() {
        let mut phone = Phone::from_number("111").unwrap();
        let result = phone.set_value(vec!["222".to_string(), "33x".to_string()]);
        assert_eq!(result, Err(ValidationError::InvalidPhone("33x".to_string())));
        assert_eq!(phone.numbers(), ["111"]);
    }

    #[test]
    fn test_phone_add_number_allows_duplicates() {
        let mut phone = Phone::from_number("111").unwrap();
        phone.add_number("111").unwrap();
        assert_eq!(phone.numbers(), ["111", "111"]);
    }

    #[test]
    fn test_phone_add_invalid_number_keeps_state() {
        let mut phone = Phone::from_number("111").unwrap();
        assert!(phone.add_number("12ab").is_err());
        assert_eq!(phone.numbers(), ["111"]);
    }

    #[test]
    fn test_phone_remove_number() {
        let mut phone = Phone::new(vec!["111".to_string(), "222".to_string(), "111".to_string()])
            .unwrap();

        assert_eq!(phone.remove_number("111"), Ok(true));
        assert_eq!(phone.numbers(), ["222", "111"]);

        assert_eq!(phone.remove_number("999"), Ok(false));
        assert_eq!(phone.numbers(), ["222", "111"]);
        assert!(phone.contains("222"));
    }

    #[test]
    fn test_phone_rejects_empty_list() {
        assert_eq!(Phone::new(Vec::<String>::new()), Err(ValidationError::NoPhoneNumbers));

        let mut phone = Phone::from_number("111").unwrap();
        assert_eq!(
            phone.set_value(Vec::<String>::new()),
            Err(ValidationError::NoPhoneNumbers)
        );
        assert_eq!(phone.numbers(), ["111"]);
    }

    #[test]
    fn test_phone_keeps_last_number() {
        let mut phone = Phone::from_number("111").unwrap();
        assert_eq!(phone.remove_number("111"), Err(ValidationError::NoPhoneNumbers));
        assert_eq!(phone.numbers(), ["111"]);

        // Absent numbers are still a no-op on a single-number phone
        assert_eq!(phone.remove_number("222"), Ok(false));
    }

    #[test]
    fn test_phone_display() {
        let mut phone = Phone::from_number("111").unwrap();
        phone.add_number("222").unwrap();
        assert_eq!(format!("{}", phone), "111, 222");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::from_number("1234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "[\"1234567890\"]");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("[\"123\", \"invalid\"]");
        assert!(result.is_err());

        let result: Result<Phone, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
