//! Detect overlapping reservations in a stored snapshot.
//!
//! The engine accepts overlapping historical data without complaint; this
//! module lets a caller find it. Overlap uses half-open night semantics, so
//! a stay that checks out on the day another checks in is NOT an overlap.

use serde::{Deserialize, Serialize};

use crate::reservation::ReservationInterval;

/// Two stored reservations that share at least one night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlap {
    pub first: ReservationInterval,
    pub second: ReservationInterval,
    pub overlap_nights: u32,
}

/// Find every pair of reservations whose occupied nights intersect.
///
/// Two stays overlap when `a.start < b.end && b.start < a.end` on their
/// ordered bounds. Pairs are reported once, in input order
/// (`first` precedes `second`).
pub fn find_overlaps(intervals: &[ReservationInterval]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();

    for (i, a) in intervals.iter().enumerate() {
        let (a_start, a_end) = a.ordered_bounds();
        for b in &intervals[i + 1..] {
            let (b_start, b_end) = b.ordered_bounds();
            if a_start < b_end && b_start < a_end {
                let overlap_start = a_start.max(b_start);
                let overlap_end = a_end.min(b_end);
                let overlap_nights =
                    u32::try_from(overlap_start.days_until(overlap_end)).unwrap_or(0);

                overlaps.push(Overlap {
                    first: *a,
                    second: *b,
                    overlap_nights,
                });
            }
        }
    }

    overlaps
}
