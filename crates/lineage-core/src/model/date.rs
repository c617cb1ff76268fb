//! Form-supplied calendar dates.
//!
//! Dates reach the validator as text typed into a form. A date that is absent
//! and a date that does not parse are both ordinary validation outcomes, so
//! the draft keeps all three states instead of failing deserialization.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date field as entered on a form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum DraftDate {
    /// Nothing was entered
    #[default]
    Missing,
    /// A calendar date
    Valid(NaiveDate),
    /// Text that is not a recognisable date (kept verbatim)
    Malformed(String),
}

impl DraftDate {
    /// Parse form text; blank text is `Missing`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return DraftDate::Missing;
        }
        match parse_calendar_date(trimmed) {
            Some(date) => DraftDate::Valid(date),
            None => DraftDate::Malformed(trimmed.to_string()),
        }
    }

    /// The calendar date, if one was entered and parsed
    pub fn as_valid(&self) -> Option<NaiveDate> {
        match self {
            DraftDate::Valid(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DraftDate::Missing)
    }
}

impl From<NaiveDate> for DraftDate {
    fn from(date: NaiveDate) -> Self {
        DraftDate::Valid(date)
    }
}

impl From<&str> for DraftDate {
    fn from(text: &str) -> Self {
        DraftDate::parse(text)
    }
}

impl From<Option<NaiveDate>> for DraftDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(DraftDate::Missing, DraftDate::Valid)
    }
}

impl From<Option<String>> for DraftDate {
    fn from(text: Option<String>) -> Self {
        text.as_deref().map_or(DraftDate::Missing, DraftDate::parse)
    }
}

impl From<DraftDate> for Option<String> {
    fn from(date: DraftDate) -> Self {
        match date {
            DraftDate::Missing => None,
            DraftDate::Valid(d) => Some(d.format("%Y-%m-%d").to_string()),
            DraftDate::Malformed(raw) => Some(raw),
        }
    }
}

impl fmt::Display for DraftDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftDate::Missing => f.write_str("(none)"),
            DraftDate::Valid(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DraftDate::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// Parse the calendar date out of a stored or typed date string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps (fractional seconds allowed). Timestamps contribute only their
/// date component, as written.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}
