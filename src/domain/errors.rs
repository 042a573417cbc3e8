//! Domain validation errors.

use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` strings double as the replies shown for a rejected
/// interactive command, so they are phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is empty.
    EmptyPhone,

    /// The provided phone number contains a non-digit character.
    InvalidPhone(String),

    /// The provided birthday lies in the future.
    FutureBirthday(NaiveDate),

    /// The provided birthday text is not a parseable date.
    UnparseableBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhone => write!(f, "Phone number cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number can only contain digits: {}", phone)
            }
            Self::FutureBirthday(date) => {
                write!(f, "Birthday cannot be in the future: {}", date)
            }
            Self::UnparseableBirthday(text) => {
                write!(f, "Not a valid birthday date: {}", text)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
