//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Every variant is a format error: the raw input did not satisfy the
/// field's construction rule and no value was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number '{}': phone number must contain exactly 10 digits",
                phone
            ),
            Self::InvalidBirthday(date) => write!(
                f,
                "Invalid birthday '{}': use a real date in DD.MM.YYYY format",
                date
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
