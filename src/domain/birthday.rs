//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted birthday layout.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A birthday in `DD.MM.YYYY` form.
///
/// The raw string is kept exactly as entered and the parsed date is cached
/// alongside it. `chrono` alone accepts unpadded fields like `1.2.1990`, so
/// the layout is checked before the calendar is.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("24.12.1990").unwrap();
/// assert_eq!(birthday.as_str(), "24.12.1990");
/// assert!(Birthday::new("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating layout and calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for anything that is not a
    /// real date written as `DD.MM.YYYY`.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = date.into();

        if !BIRTHDAY_REGEX.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            // Year 0000 parses as 1 BC
            Ok(date) if date.year() >= 1 => Ok(Self { raw, date }),
            _ => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date, birth year included.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// This birthday's anniversary in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years. `None` only
    /// when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.date.month(), 28))
    }

    /// The first anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Days from `today` until the next anniversary, 0 when it is today.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
