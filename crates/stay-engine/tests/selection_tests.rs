//! Tests for the booking-session state machine.

use stay_engine::{
    BookingRequest, BookingSelection, DateOnly, PricingConfig, ReservationInterval, SelectionState,
};

fn d(s: &str) -> DateOnly {
    s.parse().unwrap()
}

fn stay(check_in: &str, check_out: &str) -> ReservationInterval {
    ReservationInterval::new(d(check_in), d(check_out))
}

const TODAY: &str = "2024-06-01";

#[test]
fn new_selection_is_empty() {
    let sel = BookingSelection::new();

    assert_eq!(sel.state(), SelectionState::Empty);
    assert_eq!(sel.check_in(), None);
    assert_eq!(sel.check_out(), None);
    assert_eq!(sel.nights(), 0);
    assert!(sel.booking_request().is_none());
}

#[test]
fn valid_check_in_moves_to_check_in_chosen() {
    let mut sel = BookingSelection::new();

    assert!(sel.select_check_in(d("2024-06-20"), d(TODAY), &[]));
    assert_eq!(
        sel.state(),
        SelectionState::CheckInChosen {
            check_in: d("2024-06-20")
        }
    );
    assert_eq!(sel.nights(), 0);
}

#[test]
fn valid_check_out_moves_to_range_chosen() {
    let mut sel = BookingSelection::new();
    sel.select_check_in(d("2024-06-20"), d(TODAY), &[]);

    assert!(sel.select_check_out(d("2024-06-25"), &[]));
    assert_eq!(sel.check_out(), Some(d("2024-06-25")));
    assert_eq!(sel.nights(), 5);
    assert_eq!(
        sel.booking_request(),
        Some(BookingRequest {
            check_in: d("2024-06-20"),
            check_out: d("2024-06-25"),
            nights: 5,
        })
    );
}

#[test]
fn reselecting_check_in_clears_check_out() {
    let mut sel = BookingSelection::new();
    sel.select_check_in(d("2024-06-20"), d(TODAY), &[]);
    sel.select_check_out(d("2024-06-25"), &[]);

    assert!(sel.select_check_in(d("2024-06-10"), d(TODAY), &[]));

    assert_eq!(sel.check_in(), Some(d("2024-06-10")));
    assert_eq!(sel.check_out(), None);
    assert_eq!(sel.nights(), 0);
    assert!(sel.booking_request().is_none());
}

#[test]
fn check_out_can_be_repicked_within_range_chosen() {
    let mut sel = BookingSelection::new();
    sel.select_check_in(d("2024-06-20"), d(TODAY), &[]);
    sel.select_check_out(d("2024-06-25"), &[]);

    assert!(sel.select_check_out(d("2024-06-28"), &[]));
    assert_eq!(sel.check_in(), Some(d("2024-06-20")));
    assert_eq!(sel.nights(), 8);
}

#[test]
fn invalid_check_in_is_a_no_op() {
    let intervals = vec![stay("2024-06-10", "2024-06-15")];
    let mut sel = BookingSelection::new();
    sel.select_check_in(d("2024-06-20"), d(TODAY), &intervals);
    sel.select_check_out(d("2024-06-25"), &intervals);
    let before = sel.state();

    assert!(!sel.select_check_in(d("2024-06-12"), d(TODAY), &intervals));
    assert!(!sel.select_check_in(d("2024-05-20"), d(TODAY), &intervals));
    assert_eq!(sel.state(), before);
}

#[test]
fn invalid_check_out_is_a_no_op() {
    let intervals = vec![stay("2024-07-01", "2024-07-05")];
    let mut sel = BookingSelection::new();
    sel.select_check_in(d("2024-06-20"), d(TODAY), &intervals);
    let before = sel.state();

    assert!(!sel.select_check_out(d("2024-07-02"), &intervals));
    assert!(!sel.select_check_out(d("2024-06-19"), &intervals));
    assert_eq!(sel.state(), before);
}

#[test]
fn check_out_without_check_in_is_a_no_op() {
    let mut sel = BookingSelection::new();

    assert!(!sel.select_check_out(d("2024-06-25"), &[]));
    assert_eq!(sel.state(), SelectionState::Empty);
}

#[test]
fn reset_returns_to_empty() {
    let mut sel = BookingSelection::new();
    sel.select_check_in(d("2024-06-20"), d(TODAY), &[]);
    sel.select_check_out(d("2024-06-25"), &[]);

    sel.reset();

    assert_eq!(sel.state(), SelectionState::Empty);
}

#[test]
fn quote_follows_selection() {
    let cfg = PricingConfig {
        price_before_tax: 200.0,
        new_reservation_discount: -20.0,
        ..PricingConfig::default()
    };
    let mut sel = BookingSelection::new();

    sel.select_check_in(d("2024-06-20"), d(TODAY), &[]);
    let pending = sel.quote(&cfg);
    assert_eq!(pending.nights, 0);
    assert_eq!(pending.total, -20.0);

    sel.select_check_out(d("2024-06-25"), &[]);
    let quote = sel.quote(&cfg);
    assert_eq!(quote.subtotal, 1000.0);
    assert_eq!(quote.total, 980.0);
}
