//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The display name of a contact, also the address book key.
///
/// Any text is accepted verbatim. Search criteria are compared
/// case-insensitively; the book key uses the exact spelling.
///
/// # Example
///
/// ```
/// use rolodex::domain::ContactName;
///
/// let name = ContactName::new("Alice");
/// assert!(name.matches("alice"));
/// assert!(!name.matches("ali"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName. Every string is a valid name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive whole-value comparison against a search criteria.
    pub fn matches(&self, criteria: &str) -> bool {
        self.0.to_lowercase() == criteria.to_lowercase()
    }
}

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
