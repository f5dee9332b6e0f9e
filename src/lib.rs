//! Contact Book - a console assistant for names, phone numbers and birthdays.
//!
//! Records are validated when they are built, kept in an insertion-ordered
//! directory and saved to a JSON file when the session ends.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone number, birthday)
//! - **models**: The contact `Record`
//! - **directory**: Name-keyed collection of records and the birthday window query
//! - **repositories**: Loading and saving the directory
//! - **render**: User-facing text for records and listings
//! - **commands**: Command parsing and dispatch
//! - **shell**: The interactive read-eval loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod render;
pub mod repositories;
pub mod shell;

pub use commands::{Command, CommandRouter, Reply};
pub use config::Config;
pub use directory::{Directory, UpcomingBirthday};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, ShellError, StorageError};
pub use models::Record;
pub use render::{ConsoleRenderer, Renderer};
pub use repositories::{JsonFileRepository, RecordRepository};
