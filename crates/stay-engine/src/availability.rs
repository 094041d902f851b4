//! Check-in and check-out selectability against a reservation snapshot.
//!
//! Each predicate is a chain of independent gates: a date-order gate (past
//! dates, or dates before the chosen check-in), then the cross-booking gate
//! for check-outs, then the occupancy gate. A calendar renderer calls these
//! once per cell as the user advances through the booking flow.
//!
//! Occupancy here is tested with *inclusive* bounds on both ends, so a stored
//! reservation's own check-out day is not offered as a new check-in even
//! though the interval model is half-open. See DESIGN.md.

use crate::date::DateOnly;
use crate::reservation::ReservationInterval;

/// Whether `date` falls within the inclusive bounds of any reservation.
pub fn is_date_occupied(date: DateOnly, intervals: &[ReservationInterval]) -> bool {
    intervals.iter().any(|i| i.contains_inclusive(date))
}

/// Whether `date` may be picked as a check-in.
///
/// Dates strictly before `today` are rejected, then any date touching a
/// reservation (inclusive bounds).
pub fn is_check_in_selectable(
    date: DateOnly,
    today: DateOnly,
    intervals: &[ReservationInterval],
) -> bool {
    if date < today {
        return false;
    }
    !is_date_occupied(date, intervals)
}

/// The reservation with the earliest check-in strictly after `check_in`.
///
/// Does not rely on `intervals` being sorted.
pub fn next_booking(
    check_in: DateOnly,
    intervals: &[ReservationInterval],
) -> Option<&ReservationInterval> {
    intervals
        .iter()
        .filter(|i| i.check_in() > check_in)
        .min_by_key(|i| i.check_in())
}

/// Whether `date` may be picked as a check-out for the chosen `check_in`.
///
/// Always false when no check-in has been chosen. Otherwise the date must
/// not precede the check-in, must not be after the next booking's check-in
/// (a stay may end on that day but not run past it), and must not touch any
/// reservation.
///
/// There is no past-date gate: the date is only compared with `check_in`.
/// A check-in that was valid when chosen can fall into the past if the
/// session outlives the day, and its check-outs stay selectable. Callers
/// that hold a selection across midnight should re-validate the check-in
/// with [`is_check_in_selectable`].
pub fn is_check_out_selectable(
    date: DateOnly,
    check_in: Option<DateOnly>,
    intervals: &[ReservationInterval],
) -> bool {
    let Some(check_in) = check_in else {
        return false;
    };

    if date < check_in {
        return false;
    }

    if let Some(next) = next_booking(check_in, intervals) {
        if date > next.check_in() {
            return false;
        }
    }

    !is_date_occupied(date, intervals)
}
