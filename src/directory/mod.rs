//! The contact directory.
//!
//! A [`Directory`] owns every [`Record`], keyed by name in insertion order.
//! It never prints: confirmations are `tracing` events and failures are
//! typed errors, leaving all user-facing text to the renderer.

mod birthdays;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW};

use crate::error::BookResult;
use crate::models::Record;
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use tracing::{debug, info};

/// Mapping of name to record.
///
/// Iteration follows insertion order. Replacing a record under an existing
/// name keeps that name's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<String, Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from records, later duplicates replacing earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut directory = Self::new();
        for record in records {
            directory.insert(record);
        }
        directory
    }

    /// Build a record from raw fields and file it under `name`.
    ///
    /// Every field is validated before the directory is touched, so a
    /// format error leaves it unchanged. An existing record with the same
    /// name is replaced entirely.
    pub fn add_record<S: AsRef<str>>(
        &mut self,
        name: &str,
        phones: &[S],
        birthday: Option<&str>,
    ) -> BookResult<&Record> {
        let record = Record::with_fields(name, phones, birthday)?;
        let replaced = self.records.contains_key(name);
        info!(contact = name, phones = phones.len(), replaced, "Record added");

        let (index, _) = self.records.insert_full(name.to_string(), record);
        Ok(&self.records[index])
    }

    /// File an already-built record under its own name.
    ///
    /// Returns the record it replaced, if any.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        let key = record.name().to_string();
        self.records.insert(key, record)
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`.
    ///
    /// Returns the removed record, or `None` when nothing was filed there.
    /// The remaining records keep their order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        match removed {
            Some(_) => info!(contact = name, "Record removed"),
            None => debug!(contact = name, "Delete of unknown record"),
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records whose next birthday is within `window_days` of the local date.
    pub fn get_upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// Same as [`Directory::get_upcoming_birthdays`] with an explicit `today`.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming = upcoming_birthdays(self.records(), today, window_days);
        debug!(%today, window_days, found = upcoming.len(), "Birthday window query");
        upcoming
    }
}
