//! Command dispatch.

use super::command::Command;
use crate::directory::Directory;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::render::Renderer;
use tracing::debug;

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and read the next command.
    Continue(String),
    /// Show the text, save and stop.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// Runs [`Command`]s against a [`Directory`].
///
/// Owns the directory for the session and produces all reply text through
/// its [`Renderer`]. Nothing here reads input or writes output.
pub struct CommandRouter {
    directory: Directory,
    renderer: Box<dyn Renderer>,
    birthday_window: u32,
}

impl CommandRouter {
    /// Create a router over `directory`.
    ///
    /// `birthday_window` is the look-ahead used when `birthdays` is given
    /// no argument.
    pub fn new(directory: Directory, renderer: Box<dyn Renderer>, birthday_window: u32) -> Self {
        Self {
            directory,
            renderer,
            birthday_window,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn into_directory(self) -> Directory {
        self.directory
    }

    /// Parse `line` and dispatch it. Blank lines produce no reply.
    pub fn handle_line(&mut self, line: &str) -> BookResult<Option<Reply>> {
        match Command::parse(line)? {
            Some(command) => self.dispatch(command).map(Some),
            None => Ok(None),
        }
    }

    /// Run one command.
    pub fn dispatch(&mut self, command: Command) -> BookResult<Reply> {
        debug!(?command, "Dispatching command");

        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => self.renderer.render_commands(),
            Command::Add { name, phones } => {
                self.directory.add_record(&name, phones.as_slice(), None)?;
                format!("Record for {} added.", name)
            }
            Command::Change { name, phone } => {
                let record = self.record_mut(&name)?;
                let old = record
                    .first_phone()
                    .map(|p| p.as_str().to_string())
                    .ok_or_else(|| BookError::NoPhones(name.clone()))?;
                record.edit_phone(&old, &phone)?;
                format!("Phone number for {} updated.", name)
            }
            Command::Phone { name } => {
                let record = self
                    .directory
                    .find(&name)
                    .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
                self.renderer.render_record(record)
            }
            Command::All => {
                if self.directory.is_empty() {
                    "No contacts found.".to_string()
                } else {
                    self.directory
                        .records()
                        .map(|record| self.renderer.render_record(record))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::AddBirthday { name, date } => {
                self.record_mut(&name)?.add_birthday(&date)?;
                format!("Birthday for {} added.", name)
            }
            Command::ShowBirthday { name } => {
                let record = self
                    .directory
                    .find(&name)
                    .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
                let birthday = record
                    .birthday()
                    .ok_or_else(|| BookError::BirthdayNotSet(name.clone()))?;
                format!("Birthday for {}: {}", name, birthday)
            }
            Command::Birthdays { window } => {
                let window = window.unwrap_or(self.birthday_window);
                let upcoming = self.directory.get_upcoming_birthdays(window);
                self.renderer.render_upcoming(&upcoming)
            }
            Command::Remove { name } => {
                self.directory
                    .delete(&name)
                    .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
                format!("Record for {} removed.", name)
            }
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Continue(text))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.directory
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}
