//! Calendar date helpers shared by tasks and projects.
//!
//! # Invariants
//! - The only accepted textual form is `yyyy-MM-dd`.
//! - Rendering uses the same form, so parse/format agree.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `chrono` pattern for the fixed date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date text could not be parsed as `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    input: String,
    source: chrono::ParseError,
}

impl DateParseError {
    /// Raw input that failed to parse.
    pub fn input(&self) -> &str {
        self.input.as_str()
    }
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid date `{}`; expected yyyy-MM-dd: {}",
            self.input, self.source
        )
    }
}

impl Error for DateParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Parses a `yyyy-MM-dd` date.
///
/// # Errors
/// - Returns [`DateParseError`] when the text does not match the format or
///   names a day that does not exist.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| DateParseError {
        input: value.to_string(),
        source,
    })
}

/// Formats a date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
