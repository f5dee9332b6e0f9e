//! Upcoming-birthday window query.

use crate::models::Record;
use chrono::NaiveDate;

/// Default look-ahead for the `birthdays` command, in days.
pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// A record whose next birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the record
    pub name: String,

    /// Date of the next anniversary, today or later
    pub date: NaiveDate,

    /// Days from today until `date`
    pub days_until: i64,
}

/// Collect records whose next birthday is at most `window_days` away.
///
/// Results are ordered by `days_until`; records with the same distance keep
/// the order they were given in.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let date = birthday.next_occurrence(today)?;
            let days_until = (date - today).num_days();
            (days_until <= i64::from(window_days)).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                date,
                days_until,
            })
        })
        .collect();

    upcoming.sort_by_key(|entry| entry.days_until);
    upcoming
}
