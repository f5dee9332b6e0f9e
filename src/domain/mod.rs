//! Domain value objects and types.
//!
//! This module contains the validated fields a record is built from:
//! contact names, phone numbers and birthdays. Each value object runs its
//! format rule at construction time, so an invalid value can never be
//! represented in the directory.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
