//! Nightly price quotation.
//!
//! A quote is derived from a [`PricingConfig`] and a night count and is never
//! stored. Discounts are signed monetary adjustments added to the subtotal
//! as-is; there is no rounding or currency formatting here.

use serde::{Deserialize, Serialize};

use crate::date::DateOnly;

/// Per-unit pricing. Every field defaults to 0 when absent from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    pub price_before_tax: f64,
    pub new_reservation_discount: f64,
    pub week_reservation_discount: f64,
    pub month_reservation_discount: f64,
}

/// Which adjustment a discount line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountKind {
    NewReservation,
    WeekReservation,
    MonthReservation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountLine {
    pub kind: DiscountKind,
    pub amount: f64,
}

/// A price breakdown for a prospective stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nights: u32,
    pub price_per_night: f64,
    /// `price_per_night * nights`.
    pub subtotal: f64,
    /// Always the three lines, in new/week/month order, zero or not.
    pub discounts: Vec<DiscountLine>,
    /// `subtotal` plus every discount amount.
    pub total: f64,
}

/// Whole nights between two dates.
///
/// Zero when either date is absent or `check_out` is not strictly after
/// `check_in`; never negative.
pub fn nights_between(check_in: Option<DateOnly>, check_out: Option<DateOnly>) -> u32 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            u32::try_from(check_in.days_until(check_out)).unwrap_or(0)
        }
        _ => 0,
    }
}

/// Price `nights` nights under `config`.
pub fn compute_quote(config: &PricingConfig, nights: u32) -> Quote {
    let subtotal = config.price_before_tax * f64::from(nights);

    let discounts = vec![
        DiscountLine {
            kind: DiscountKind::NewReservation,
            amount: config.new_reservation_discount,
        },
        DiscountLine {
            kind: DiscountKind::WeekReservation,
            amount: config.week_reservation_discount,
        },
        DiscountLine {
            kind: DiscountKind::MonthReservation,
            amount: config.month_reservation_discount,
        },
    ];

    let total = subtotal + discounts.iter().map(|d| d.amount).sum::<f64>();

    Quote {
        nights,
        price_per_night: config.price_before_tax,
        subtotal,
        discounts,
        total,
    }
}

/// Price the stay `[check_in, check_out)`.
pub fn quote_stay(
    config: &PricingConfig,
    check_in: Option<DateOnly>,
    check_out: Option<DateOnly>,
) -> Quote {
    compute_quote(config, nights_between(check_in, check_out))
}
