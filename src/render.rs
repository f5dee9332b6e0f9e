//! Console rendering of records and listings.
//!
//! The router hands every piece of user-facing text to a [`Renderer`], so
//! swapping the console output (or capturing it in tests) never touches the
//! directory.

use crate::directory::UpcomingBirthday;
use crate::models::Record;

/// Commands shown by `help`, as `(usage, description)`.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("hello", "Greet the assistant"),
    ("add <name> [phones...]", "Add a contact, replacing any with the same name"),
    ("change <name> <phone>", "Change the contact's first phone number"),
    ("phone <name>", "Show the contact card"),
    ("all", "Show all contacts"),
    ("add-birthday <name> <DD.MM.YYYY>", "Set the contact's birthday"),
    ("show-birthday <name>", "Show the contact's birthday"),
    ("birthdays [days]", "Show birthdays coming up within the window"),
    ("remove <name>", "Delete the contact"),
    ("help", "Show this list"),
    ("close | exit", "Save and quit"),
];

/// Turns core values into user-facing text.
pub trait Renderer: Send + Sync {
    /// One contact card.
    fn render_record(&self, record: &Record) -> String;

    /// The static command listing.
    fn render_commands(&self) -> String;

    /// The result of a birthday window query.
    fn render_upcoming(&self, upcoming: &[UpcomingBirthday]) -> String;
}

/// Plain-text renderer for the interactive console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render_record(&self, record: &Record) -> String {
        record.to_display_string()
    }

    fn render_commands(&self) -> String {
        let width = COMMAND_HELP
            .iter()
            .map(|(usage, _)| usage.len())
            .max()
            .unwrap_or(0);

        let mut out = String::from("Available commands:");
        for (usage, description) in COMMAND_HELP {
            out.push_str(&format!("\n  {:<width$}  {}", usage, description, width = width));
        }
        out
    }

    fn render_upcoming(&self, upcoming: &[UpcomingBirthday]) -> String {
        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }

        let mut out = String::from("Upcoming birthdays:");
        for entry in upcoming {
            let when = match entry.days_until {
                0 => "today".to_string(),
                1 => "tomorrow".to_string(),
                n => format!("in {} days", n),
            };
            out.push_str(&format!(
                "\n  {} - {} ({})",
                entry.name,
                entry.date.format("%d.%m"),
                when
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_record_uses_display_contract() {
        let record = Record::with_fields("Ann", &["1234567890"], Some("24.12.1990")).unwrap();
        assert_eq!(
            ConsoleRenderer.render_record(&record),
            "Name: Ann, Phones: 1234567890, Birthday: 24.12.1990"
        );
    }

    #[test]
    fn test_render_commands_lists_every_verb() {
        let listing = ConsoleRenderer.render_commands();
        assert!(listing.starts_with("Available commands:"));
        for verb in [
            "add ", "change ", "phone ", "all", "add-birthday ", "show-birthday ",
            "birthdays ", "remove ", "exit",
        ] {
            assert!(listing.contains(verb), "missing {verb}");
        }
    }

    #[test]
    fn test_render_upcoming() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let upcoming = vec![
            UpcomingBirthday {
                name: "Ann".to_string(),
                date,
                days_until: 0,
            },
            UpcomingBirthday {
                name: "Bob".to_string(),
                date,
                days_until: 5,
            },
        ];

        assert_eq!(
            ConsoleRenderer.render_upcoming(&upcoming),
            "Upcoming birthdays:\n  Ann - 15.06 (today)\n  Bob - 15.06 (in 5 days)"
        );
        assert_eq!(ConsoleRenderer.render_upcoming(&[]), "No upcoming birthdays.");
    }
}
