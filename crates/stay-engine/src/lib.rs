//! # stay-engine
//!
//! Date-range availability and price quotations for a bookable unit.
//!
//! Given a snapshot of existing reservations, the engine answers which days a
//! guest may pick as check-in and check-out, and prices the chosen stay. It is
//! pure and synchronous: no I/O, no clock reads ("today" is a parameter), no
//! shared state.
//!
//! ## Modules
//!
//! - [`date`] — `DateOnly`, the whole-day value every comparison uses
//! - [`reservation`] — raw records → sorted `ReservationInterval`s
//! - [`availability`] — check-in / check-out selectability predicates
//! - [`calendar`] — per-day selectability over a rendering window
//! - [`conflict`] — detect overlapping stored reservations
//! - [`quote`] — nights and price breakdown
//! - [`selection`] — the booking-session state machine
//! - [`error`] — Error types

pub mod availability;
pub mod calendar;
pub mod conflict;
pub mod date;
pub mod error;
pub mod quote;
pub mod reservation;
pub mod selection;

pub use availability::{
    is_check_in_selectable, is_check_out_selectable, is_date_occupied, next_booking,
};
pub use calendar::{check_in_calendar, check_out_calendar, first_check_in_date, DayAvailability};
pub use conflict::{find_overlaps, Overlap};
pub use date::DateOnly;
pub use error::StayError;
pub use quote::{
    compute_quote, nights_between, quote_stay, DiscountKind, DiscountLine, PricingConfig, Quote,
};
pub use reservation::{
    normalize, normalize_json, parse_reservation, try_normalize, Normalized, RawDate,
    RawReservation, RejectedRecord, ReservationInterval,
};
pub use selection::{BookingRequest, BookingSelection, SelectionState};
