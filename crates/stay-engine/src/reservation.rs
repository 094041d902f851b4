//! Reservation records and their normalization into sorted intervals.
//!
//! Raw records arrive from the data source with loosely typed date fields.
//! [`normalize`] parses each one into a [`ReservationInterval`], skips the
//! records that fail, and returns the survivors sorted by check-in.

use serde::{Deserialize, Serialize};

use crate::date::DateOnly;
use crate::error::{Result, StayError};

/// A date-like value as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    /// An already-typed calendar day.
    Native(DateOnly),
    /// An ISO-8601 date or timestamp string.
    Text(String),
    /// Any other JSON value (a number, a boolean, an object). Never resolves.
    Other(serde_json::Value),
}

impl RawDate {
    /// Resolve to a calendar day.
    ///
    /// # Errors
    /// Returns `StayError::InvalidDate` if a text value is not a valid date
    /// or the value is not date-like at all.
    pub fn resolve(&self) -> Result<DateOnly> {
        match self {
            RawDate::Native(d) => Ok(*d),
            RawDate::Text(s) => DateOnly::parse(s),
            RawDate::Other(v) => Err(StayError::InvalidDate {
                value: v.to_string(),
            }),
        }
    }
}

impl From<DateOnly> for RawDate {
    fn from(d: DateOnly) -> Self {
        RawDate::Native(d)
    }
}

impl From<&str> for RawDate {
    fn from(s: &str) -> Self {
        RawDate::Text(s.to_string())
    }
}

impl From<String> for RawDate {
    fn from(s: String) -> Self {
        RawDate::Text(s)
    }
}

/// An unparsed reservation record, `{ "checkIn": ..., "checkOut": ... }`.
///
/// A field that is `null` or absent deserializes to `None` and fails later,
/// in [`parse_reservation`], so it only costs the one record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawReservation {
    pub check_in: Option<RawDate>,
    pub check_out: Option<RawDate>,
}

impl RawReservation {
    pub fn new(check_in: impl Into<RawDate>, check_out: impl Into<RawDate>) -> Self {
        Self {
            check_in: Some(check_in.into()),
            check_out: Some(check_out.into()),
        }
    }
}

fn resolve_field(field: &'static str, raw: Option<&RawDate>) -> Result<DateOnly> {
    raw.ok_or(StayError::MissingDate { field })?.resolve()
}

/// A booked stay occupying the nights `[check_in, check_out)`.
///
/// Fields are private so an interval cannot be edited after construction.
/// Inverted intervals (`check_out < check_in`) are accepted as historical
/// data; membership queries treat them as spanning both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInterval {
    check_in: DateOnly,
    check_out: DateOnly,
}

impl ReservationInterval {
    pub fn new(check_in: DateOnly, check_out: DateOnly) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    pub fn check_in(&self) -> DateOnly {
        self.check_in
    }

    pub fn check_out(&self) -> DateOnly {
        self.check_out
    }

    /// Whether `date` lies between the two bounds, both ends included.
    pub fn contains_inclusive(&self, date: DateOnly) -> bool {
        let (lo, hi) = self.ordered_bounds();
        lo <= date && date <= hi
    }

    /// Whether `date` is an occupied night, i.e. within `[check_in, check_out)`.
    pub fn occupies_night(&self, date: DateOnly) -> bool {
        let (lo, hi) = self.ordered_bounds();
        lo <= date && date < hi
    }

    /// Number of occupied nights. Zero for empty or inverted intervals.
    pub fn nights(&self) -> u32 {
        u32::try_from(self.check_in.days_until(self.check_out)).unwrap_or(0)
    }

    pub(crate) fn ordered_bounds(&self) -> (DateOnly, DateOnly) {
        if self.check_in <= self.check_out {
            (self.check_in, self.check_out)
        } else {
            (self.check_out, self.check_in)
        }
    }
}

/// A record dropped during [`normalize`], with its position in the input.
#[derive(Debug)]
pub struct RejectedRecord {
    pub index: usize,
    pub error: StayError,
}

/// The outcome of [`normalize`]: sorted intervals plus skipped records.
#[derive(Debug, Default)]
pub struct Normalized {
    pub intervals: Vec<ReservationInterval>,
    pub rejected: Vec<RejectedRecord>,
}

/// Parse a single raw record into an interval.
///
/// # Errors
/// Returns `StayError::MissingDate` if a date field is absent or null, and
/// `StayError::InvalidDate` if it is not a valid calendar date.
pub fn parse_reservation(raw: &RawReservation) -> Result<ReservationInterval> {
    let check_in = resolve_field("checkIn", raw.check_in.as_ref())?;
    let check_out = resolve_field("checkOut", raw.check_out.as_ref())?;
    Ok(ReservationInterval::new(check_in, check_out))
}

/// Parse and sort a batch of reservation records.
///
/// Records with an unparseable date are skipped and returned in
/// [`Normalized::rejected`], so one malformed record never blocks
/// availability for the rest. The surviving intervals are stably sorted by
/// check-in. Overlapping intervals are kept as-is.
pub fn normalize(reservations: &[RawReservation]) -> Normalized {
    collect_lenient(reservations.iter().map(parse_reservation))
}

/// [`normalize`] straight from a JSON array.
///
/// Each element is decoded on its own, so an element that is not even a
/// record object (`null`, a number, a string) is rejected like a record with
/// a bad date instead of failing the whole array.
///
/// # Errors
/// Returns `StayError::Json` only if the input is not a JSON array.
pub fn normalize_json(reservations_json: &str) -> Result<Normalized> {
    let values: Vec<serde_json::Value> = serde_json::from_str(reservations_json)?;

    Ok(collect_lenient(values.into_iter().map(|value| {
        let raw: RawReservation = serde_json::from_value(value)?;
        parse_reservation(&raw)
    })))
}

fn collect_lenient(parsed: impl Iterator<Item = Result<ReservationInterval>>) -> Normalized {
    let mut out = Normalized::default();

    for (index, result) in parsed.enumerate() {
        match result {
            Ok(interval) => out.intervals.push(interval),
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed reservation");
                out.rejected.push(RejectedRecord { index, error });
            }
        }
    }

    sort_by_check_in(&mut out.intervals);
    out
}

/// Strict variant of [`normalize`] that fails on the first malformed record.
///
/// # Errors
/// Returns `StayError::InvalidRecord` wrapping the parse failure and the
/// index of the offending record.
pub fn try_normalize(reservations: &[RawReservation]) -> Result<Vec<ReservationInterval>> {
    let mut intervals = reservations
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            parse_reservation(raw).map_err(|e| StayError::InvalidRecord {
                index,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    sort_by_check_in(&mut intervals);
    Ok(intervals)
}

fn sort_by_check_in(intervals: &mut [ReservationInterval]) {
    // `sort_by_key` is stable: equal check-ins keep input order.
    intervals.sort_by_key(|i| i.check_in);
}
