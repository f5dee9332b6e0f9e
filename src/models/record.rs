//! Record model representing one person in the contact book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers in entry order and an optional
/// birthday.
///
/// Phone numbers may repeat. Every stored field has passed its format rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name and nothing else.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record with initial phones and birthday.
    ///
    /// Construction is all-or-nothing: the first invalid field aborts it and
    /// no record is produced.
    pub fn with_fields<S: AsRef<str>>(
        name: impl Into<String>,
        phones: &[S],
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = ContactName::new(name)?;
        let phones = phones
            .iter()
            .map(|p| PhoneNumber::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = birthday.map(Birthday::new).transpose()?;

        Ok(Self {
            name,
            phones,
            birthday,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// The phone the `change` command edits.
    pub fn first_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many went.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if no phone equals `old`
    /// - `BookError::Format` if `new` is not a valid phone number
    ///
    /// The phone list is unchanged on either error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            })?;

        slot.set(new)?;
        Ok(())
    }

    /// Validate `date` and set it, replacing any previous birthday.
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// `Name: <name>, Phones: <a, b>[, Birthday: <date>]`
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "Name: {}, Phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
