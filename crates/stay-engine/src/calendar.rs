//! Per-day selectability calendars for a rendering window.
//!
//! Walks every day of an inclusive window and evaluates the check-in or
//! check-out predicate for it, producing one cell per day in ascending order.

use serde::{Deserialize, Serialize};

use crate::availability::{is_check_in_selectable, is_check_out_selectable};
use crate::date::DateOnly;
use crate::reservation::ReservationInterval;

/// A single calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: DateOnly,
    pub selectable: bool,
}

/// Evaluate `predicate` for each day in `[from, to]`.
///
/// Returns an empty list when `from > to`.
fn walk_days(
    from: DateOnly,
    to: DateOnly,
    mut predicate: impl FnMut(DateOnly) -> bool,
) -> Vec<DayAvailability> {
    let mut days = Vec::new();
    let mut cursor = Some(from);

    while let Some(date) = cursor.filter(|d| *d <= to) {
        days.push(DayAvailability {
            date,
            selectable: predicate(date),
        });
        cursor = date.succ();
    }

    days
}

/// Check-in selectability for every day in `[from, to]`.
pub fn check_in_calendar(
    from: DateOnly,
    to: DateOnly,
    today: DateOnly,
    intervals: &[ReservationInterval],
) -> Vec<DayAvailability> {
    walk_days(from, to, |date| {
        is_check_in_selectable(date, today, intervals)
    })
}

/// Check-out selectability for every day in `[from, to]` given a check-in.
///
/// With no check-in every cell is unselectable.
pub fn check_out_calendar(
    from: DateOnly,
    to: DateOnly,
    check_in: Option<DateOnly>,
    intervals: &[ReservationInterval],
) -> Vec<DayAvailability> {
    walk_days(from, to, |date| {
        is_check_out_selectable(date, check_in, intervals)
    })
}

/// The first selectable check-in day in `[from, to]`, if any.
pub fn first_check_in_date(
    from: DateOnly,
    to: DateOnly,
    today: DateOnly,
    intervals: &[ReservationInterval],
) -> Option<DateOnly> {
    check_in_calendar(from, to, today, intervals)
        .into_iter()
        .find(|day| day.selectable)
        .map(|day| day.date)
}
