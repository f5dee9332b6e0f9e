//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field format errors live in [`crate::domain::ValidationError`] and convert into
//! [`BookError`] so command handlers can use `?` throughout.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by directory operations and command dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number, birthday or name failed its format rule
    #[error(transparent)]
    Format(#[from] ValidationError),

    /// No record is filed under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record has no phone equal to the given value
    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    /// The record has no phone numbers to change
    #[error("{0} has no phone numbers")]
    NoPhones(String),

    /// The record exists but has no birthday
    #[error("No birthday set for {0}")]
    BirthdayNotSet(String),

    /// Command received the wrong number of arguments
    #[error("Wrong number of arguments for '{command}': expected {expected}, got {got}")]
    ArgumentCount {
        command: String,
        expected: &'static str,
        got: usize,
    },

    /// An argument had the right arity but an unusable value
    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument { command: String, reason: String },

    /// The input line is not valid UTF-8
    #[error("Input is not valid UTF-8, command ignored")]
    InvalidEncoding,

    /// The command verb is not recognized
    #[error("Unknown command: {0}. Type 'help' to list commands")]
    UnknownCommand(String),
}

/// Errors that can occur while loading or saving the directory.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON or holds invalid fields
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The data file was written by an incompatible version
    #[error("Unsupported data file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that end an interactive shell session.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading input or writing output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The directory could not be saved
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ShellError
pub type ShellResult<T> = Result<T, ShellError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
