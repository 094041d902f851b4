//! Whole-day calendar dates.
//!
//! Every date the engine compares is a [`DateOnly`]: a calendar day with no
//! time-of-day and no zone. Raw inputs are parsed into this type once, at the
//! boundary, and nothing downstream ever sees a timestamp.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StayError};

/// Naive timestamp layouts accepted in addition to RFC 3339.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// A calendar day, ordered chronologically. Serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateOnly(NaiveDate);

impl DateOnly {
    /// Build a date from its components, or `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a date-like string into a calendar day.
    ///
    /// Accepts a plain ISO-8601 date (`2024-06-10`), an RFC 3339 timestamp
    /// (`2024-06-10T14:00:00+03:00`) or a naive timestamp
    /// (`2024-06-10T14:00:00`). Timestamps are truncated to the date as
    /// written; no zone conversion is applied.
    ///
    /// # Errors
    /// Returns `StayError::InvalidDate` if the input is not a valid calendar date.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self(d));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.date_naive()));
        }
        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|ndt| Self(ndt.date()))
            .ok_or_else(|| StayError::InvalidDate {
                value: s.to_string(),
            })
    }

    /// Signed number of whole days from `self` to `later`.
    pub fn days_until(self, later: DateOnly) -> i64 {
        (later.0 - self.0).num_days()
    }

    /// The following calendar day, or `None` at the end of chrono's range.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateOnly {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl From<DateOnly> for NaiveDate {
    fn from(d: DateOnly) -> Self {
        d.0
    }
}

impl FromStr for DateOnly {
    type Err = StayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> DateOnly {
        DateOnly::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_date() {
        assert_eq!(DateOnly::parse("2024-06-10").unwrap(), ymd(2024, 6, 10));
    }

    #[test]
    fn parses_rfc3339_as_written_date() {
        assert_eq!(
            DateOnly::parse("2024-06-10T23:30:00-05:00").unwrap(),
            ymd(2024, 6, 10)
        );
        assert_eq!(
            DateOnly::parse("2024-06-10T00:00:00Z").unwrap(),
            ymd(2024, 6, 10)
        );
    }

    #[test]
    fn parses_naive_timestamp_with_and_without_fraction() {
        assert_eq!(
            DateOnly::parse("2024-06-10T14:00:00").unwrap(),
            ymd(2024, 6, 10)
        );
        assert_eq!(
            DateOnly::parse("2024-06-10T14:00:00.250").unwrap(),
            ymd(2024, 6, 10)
        );
    }

    #[test]
    fn rejects_impossible_and_garbage_dates() {
        assert!(matches!(
            DateOnly::parse("2024-02-30"),
            Err(StayError::InvalidDate { .. })
        ));
        assert!(DateOnly::parse("").is_err());
        assert!(DateOnly::parse("next tuesday").is_err());
    }

    #[test]
    fn display_is_iso() {
        assert_eq!(ymd(2024, 1, 5).to_string(), "2024-01-05");
    }

    #[test]
    fn days_until_is_signed() {
        assert_eq!(ymd(2024, 6, 20).days_until(ymd(2024, 6, 25)), 5);
        assert_eq!(ymd(2024, 6, 25).days_until(ymd(2024, 6, 20)), -5);
    }
}
