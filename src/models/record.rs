//! Record model representing one contact in the book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use serde::Serialize;

/// One contact: a required name plus optional phone and birthday.
///
/// The field types enforce their own invariants at construction, so the
/// fields can stay public without the record ever becoming observably
/// invalid. Serialization produces the persisted object shape
/// `{"name", "phone", "birthday"}`, with `null` for absent fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Display name, also the address book key
    pub name: ContactName,

    /// Phone number, digits only
    pub phone: Option<PhoneNumber>,

    /// Date of birth
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phone or birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phone: None,
            birthday: None,
        }
    }

    /// Attach a phone number.
    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Attach a birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// True when any field matches the search criteria: the name
    /// case-insensitively, the phone or the birthday's textual form
    /// exactly. Matching is whole-value, never substring.
    pub fn matches_criteria(&self, criteria: &str) -> bool {
        if self.name.matches(criteria) {
            return true;
        }
        if self.phone.as_ref().is_some_and(|p| p.matches(criteria)) {
            return true;
        }
        self.birthday.as_ref().is_some_and(|b| b.matches(criteria))
    }

    /// Whole days until the next birthday, `None` when no birthday is
    /// set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.birthday.map(|b| b.days_until_next())
    }
}
