//! WASM bindings for stay-engine.
//!
//! Exposes availability predicates, calendars, overlap detection and quoting
//! to the JavaScript booking widget via `wasm-bindgen`. Reservation lists and
//! pricing configs cross the boundary as JSON strings; single dates are plain
//! ISO-8601 strings.
//!
//! Every export that takes a reservation list skips malformed records and
//! does not report them; the library's `warn!` events have no subscriber in a
//! browser. Call `normalizeReservations` on the same list to see what was
//! rejected and why.
//!
//! Each export is a thin wrapper over a native `*_json` function that returns
//! `stay_engine::error::Result`, so the marshalling can be unit-tested without
//! a JavaScript host.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p stay-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/stay-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/stay_engine_wasm.wasm
//! ```

use serde::Serialize;
use stay_engine::error::Result as EngineResult;
use stay_engine::{
    DateOnly, DayAvailability, Overlap, PricingConfig, ReservationInterval, StayError,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RejectedDto {
    index: usize,
    error: String,
}

#[derive(Serialize)]
struct NormalizedDto {
    intervals: Vec<ReservationInterval>,
    rejected: Vec<RejectedDto>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn to_js(e: StayError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_optional_date(s: Option<&str>) -> EngineResult<Option<DateOnly>> {
    s.map(DateOnly::parse).transpose()
}

/// Parse a JSON array of `{checkIn, checkOut}` records into sorted intervals.
///
/// Malformed elements are skipped and their rejections discarded; see
/// [`normalize_reservations_json`] for the diagnostics.
fn intervals_from_json(reservations_json: &str) -> EngineResult<Vec<ReservationInterval>> {
    Ok(stay_engine::normalize_json(reservations_json)?.intervals)
}

// ---------------------------------------------------------------------------
// Native entry points
// ---------------------------------------------------------------------------

/// Normalize a JSON array of raw reservations.
///
/// Returns `{"intervals": [{checkIn, checkOut}], "rejected": [{index, error}]}`.
/// Only a top-level value that is not an array is an error.
pub fn normalize_reservations_json(reservations_json: &str) -> EngineResult<String> {
    let out = stay_engine::normalize_json(reservations_json)?;

    let dto = NormalizedDto {
        intervals: out.intervals,
        rejected: out
            .rejected
            .into_iter()
            .map(|r| RejectedDto {
                index: r.index,
                error: r.error.to_string(),
            })
            .collect(),
    };
    Ok(serde_json::to_string(&dto)?)
}

pub fn is_check_in_selectable_json(
    date: &str,
    today: &str,
    reservations_json: &str,
) -> EngineResult<bool> {
    let intervals = intervals_from_json(reservations_json)?;
    Ok(stay_engine::is_check_in_selectable(
        DateOnly::parse(date)?,
        DateOnly::parse(today)?,
        &intervals,
    ))
}

pub fn is_check_out_selectable_json(
    date: &str,
    check_in: Option<&str>,
    reservations_json: &str,
) -> EngineResult<bool> {
    let intervals = intervals_from_json(reservations_json)?;
    Ok(stay_engine::is_check_out_selectable(
        DateOnly::parse(date)?,
        parse_optional_date(check_in)?,
        &intervals,
    ))
}

pub fn check_in_calendar_json(
    from: &str,
    to: &str,
    today: &str,
    reservations_json: &str,
) -> EngineResult<String> {
    let intervals = intervals_from_json(reservations_json)?;
    let days: Vec<DayAvailability> = stay_engine::check_in_calendar(
        DateOnly::parse(from)?,
        DateOnly::parse(to)?,
        DateOnly::parse(today)?,
        &intervals,
    );
    Ok(serde_json::to_string(&days)?)
}

pub fn check_out_calendar_json(
    from: &str,
    to: &str,
    check_in: Option<&str>,
    reservations_json: &str,
) -> EngineResult<String> {
    let intervals = intervals_from_json(reservations_json)?;
    let days: Vec<DayAvailability> = stay_engine::check_out_calendar(
        DateOnly::parse(from)?,
        DateOnly::parse(to)?,
        parse_optional_date(check_in)?,
        &intervals,
    );
    Ok(serde_json::to_string(&days)?)
}

pub fn find_overlaps_json(reservations_json: &str) -> EngineResult<String> {
    let intervals = intervals_from_json(reservations_json)?;
    let overlaps: Vec<Overlap> = stay_engine::find_overlaps(&intervals);
    Ok(serde_json::to_string(&overlaps)?)
}

pub fn nights_between_json(check_in: Option<&str>, check_out: Option<&str>) -> EngineResult<u32> {
    Ok(stay_engine::nights_between(
        parse_optional_date(check_in)?,
        parse_optional_date(check_out)?,
    ))
}

pub fn compute_quote_json(config_json: &str, nights: u32) -> EngineResult<String> {
    let config: PricingConfig = serde_json::from_str(config_json)?;
    Ok(serde_json::to_string(&stay_engine::compute_quote(
        &config, nights,
    ))?)
}

pub fn quote_stay_json(
    config_json: &str,
    check_in: Option<&str>,
    check_out: Option<&str>,
) -> EngineResult<String> {
    let config: PricingConfig = serde_json::from_str(config_json)?;
    let quote = stay_engine::quote_stay(
        &config,
        parse_optional_date(check_in)?,
        parse_optional_date(check_out)?,
    );
    Ok(serde_json::to_string(&quote)?)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Normalize raw reservations. See [`normalize_reservations_json`].
#[wasm_bindgen(js_name = "normalizeReservations")]
pub fn normalize_reservations(reservations_json: &str) -> Result<String, JsValue> {
    normalize_reservations_json(reservations_json).map_err(to_js)
}

/// Whether `date` may be picked as a check-in, given `today` and the
/// reservation list. Malformed reservations are skipped silently.
#[wasm_bindgen(js_name = "isCheckInSelectable")]
pub fn is_check_in_selectable(
    date: &str,
    today: &str,
    reservations_json: &str,
) -> Result<bool, JsValue> {
    is_check_in_selectable_json(date, today, reservations_json).map_err(to_js)
}

/// Whether `date` may be picked as a check-out. `check_in` may be `undefined`.
/// Malformed reservations are skipped silently.
#[wasm_bindgen(js_name = "isCheckOutSelectable")]
pub fn is_check_out_selectable(
    date: &str,
    check_in: Option<String>,
    reservations_json: &str,
) -> Result<bool, JsValue> {
    is_check_out_selectable_json(date, check_in.as_deref(), reservations_json).map_err(to_js)
}

/// Check-in selectability for every day in `[from, to]`, as a JSON array of
/// `{date, selectable}`.
#[wasm_bindgen(js_name = "checkInCalendar")]
pub fn check_in_calendar(
    from: &str,
    to: &str,
    today: &str,
    reservations_json: &str,
) -> Result<String, JsValue> {
    check_in_calendar_json(from, to, today, reservations_json).map_err(to_js)
}

/// Check-out selectability for every day in `[from, to]`.
#[wasm_bindgen(js_name = "checkOutCalendar")]
pub fn check_out_calendar(
    from: &str,
    to: &str,
    check_in: Option<String>,
    reservations_json: &str,
) -> Result<String, JsValue> {
    check_out_calendar_json(from, to, check_in.as_deref(), reservations_json).map_err(to_js)
}

#[wasm_bindgen(js_name = "findOverlaps")]
pub fn find_overlaps(reservations_json: &str) -> Result<String, JsValue> {
    find_overlaps_json(reservations_json).map_err(to_js)
}

#[wasm_bindgen(js_name = "nightsBetween")]
pub fn nights_between(
    check_in: Option<String>,
    check_out: Option<String>,
) -> Result<u32, JsValue> {
    nights_between_json(check_in.as_deref(), check_out.as_deref()).map_err(to_js)
}

/// Price `nights` nights. `config_json` is a camelCase pricing config; absent
/// fields count as 0.
#[wasm_bindgen(js_name = "computeQuote")]
pub fn compute_quote(config_json: &str, nights: u32) -> Result<String, JsValue> {
    compute_quote_json(config_json, nights).map_err(to_js)
}

#[wasm_bindgen(js_name = "quoteStay")]
pub fn quote_stay(
    config_json: &str,
    check_in: Option<String>,
    check_out: Option<String>,
) -> Result<String, JsValue> {
    quote_stay_json(config_json, check_in.as_deref(), check_out.as_deref()).map_err(to_js)
}
