//! Birthday value object and next-occurrence arithmetic.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's date of birth.
///
/// Validated at construction time: the date must not lie after today.
/// There is no lower bound, so dates arbitrarily far in the past are
/// accepted.
///
/// The persisted form is the ISO-8601 date-time at midnight
/// (`1990-05-17T00:00:00`); plain dates (`1990-05-17`) are also accepted
/// on read. The display form is the plain date, which is the textual
/// representation used for search matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating it against today's date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::FutureBirthday` when `date` lies after
    /// today.
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_as_of(date, Local::now().date_naive())
    }

    fn new_as_of(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if date > today {
            return Err(ValidationError::FutureBirthday(date));
        }
        Ok(Self(date))
    }

    /// Parse a Birthday from its persisted textual form.
    ///
    /// Accepts an ISO-8601 date-time (the time component is discarded)
    /// or a plain date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnparseableBirthday` for text that is
    /// not a date, and `ValidationError::FutureBirthday` for dates after
    /// today, exactly as interactive input would.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let date = text
            .parse::<NaiveDateTime>()
            .map(|dt| dt.date())
            .or_else(|_| text.parse::<NaiveDate>())
            .map_err(|_| ValidationError::UnparseableBirthday(text.to_string()))?;
        Self::new(date)
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whole days from today until the next occurrence of the birth
    /// month and day.
    ///
    /// The next occurrence is the first one strictly after today: a
    /// birthday falling on today counts as already passed and reports
    /// next year's date (365 or 366 days out).
    pub fn days_until_next(&self) -> i64 {
        self.days_until_next_from(Local::now().date_naive())
    }

    fn days_until_next_from(&self, today: NaiveDate) -> i64 {
        let this_year = Self::occurrence_in(self.0, today.year());
        let next = if this_year > today {
            this_year
        } else {
            Self::occurrence_in(self.0, today.year() + 1)
        };
        (next - today).num_days()
    }

    /// The occurrence of the birth month/day in `year`.
    ///
    /// A February 29 birthday resolves to March 1 in non-leap years.
    fn occurrence_in(birth: NaiveDate, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, birth.month(), birth.day()).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
        })
    }

    /// Case-insensitive whole-value comparison of the display form
    /// (`1990-05-17`) against a search criteria.
    pub fn matches(&self, criteria: &str) -> bool {
        self.to_string() == criteria.to_lowercase()
    }
}

// Serde support - serialize as an ISO-8601 date-time at midnight
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0
            .and_time(NaiveTime::MIN)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
            .serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
