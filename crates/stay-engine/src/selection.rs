//! The check-in/check-out selection of a single booking session.
//!
//! The selection is one state machine rather than two independent fields:
//! a check-out can only exist inside [`SelectionState::RangeChosen`], which
//! also carries the check-in it was validated against. Choosing a new
//! check-in therefore drops any check-out by construction.
//!
//! Every `select_*` method validates through the availability predicates
//! and returns `false` without touching the state when the date is rejected.

use serde::{Deserialize, Serialize};

use crate::availability::{is_check_in_selectable, is_check_out_selectable};
use crate::date::DateOnly;
use crate::quote::{compute_quote, nights_between, PricingConfig, Quote};
use crate::reservation::ReservationInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    CheckInChosen {
        check_in: DateOnly,
    },
    RangeChosen {
        check_in: DateOnly,
        check_out: DateOnly,
    },
}

/// A completed range, ready for the external submission step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub check_in: DateOnly,
    pub check_out: DateOnly,
    pub nights: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BookingSelection {
    state: SelectionState,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn check_in(&self) -> Option<DateOnly> {
        match self.state {
            SelectionState::Empty => None,
            SelectionState::CheckInChosen { check_in }
            | SelectionState::RangeChosen { check_in, .. } => Some(check_in),
        }
    }

    pub fn check_out(&self) -> Option<DateOnly> {
        match self.state {
            SelectionState::RangeChosen { check_out, .. } => Some(check_out),
            _ => None,
        }
    }

    pub fn nights(&self) -> u32 {
        nights_between(self.check_in(), self.check_out())
    }

    /// Choose a check-in date, clearing any check-out.
    ///
    /// Returns `false` and leaves the selection unchanged if the date is not
    /// a selectable check-in.
    pub fn select_check_in(
        &mut self,
        date: DateOnly,
        today: DateOnly,
        intervals: &[ReservationInterval],
    ) -> bool {
        if !is_check_in_selectable(date, today, intervals) {
            tracing::debug!(%date, "check-in rejected");
            return false;
        }

        self.state = SelectionState::CheckInChosen { check_in: date };
        tracing::debug!(%date, "check-in chosen");
        true
    }

    /// Choose a check-out date for the current check-in.
    ///
    /// Returns `false` and leaves the selection unchanged if there is no
    /// check-in yet or the date is not a selectable check-out for it.
    pub fn select_check_out(&mut self, date: DateOnly, intervals: &[ReservationInterval]) -> bool {
        let Some(check_in) = self.check_in() else {
            tracing::debug!(%date, "check-out rejected: no check-in");
            return false;
        };
        if !is_check_out_selectable(date, Some(check_in), intervals) {
            tracing::debug!(%check_in, %date, "check-out rejected");
            return false;
        }

        self.state = SelectionState::RangeChosen {
            check_in,
            check_out: date,
        };
        tracing::debug!(%check_in, check_out = %date, "range chosen");
        true
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Empty;
    }

    /// Price the current selection.
    ///
    /// Until a range is chosen this is a zero-night quote, whose total is the
    /// sum of the configured discounts.
    pub fn quote(&self, config: &PricingConfig) -> Quote {
        compute_quote(config, self.nights())
    }

    /// The completed range, available only once both dates are chosen.
    pub fn booking_request(&self) -> Option<BookingRequest> {
        match self.state {
            SelectionState::RangeChosen {
                check_in,
                check_out,
            } => Some(BookingRequest {
                check_in,
                check_out,
                nights: nights_between(Some(check_in), Some(check_out)),
            }),
            _ => None,
        }
    }
}
