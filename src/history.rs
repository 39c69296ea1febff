//! Historical solar-storm reference catalog.
//!
//! Dates of well-known geomagnetic storms together with the index values and
//! storm magnitudes the original analysis claimed for them. No derivation or
//! data provenance exists for these numbers; they are illustrative fixtures
//! for comparison displays, not validated ground truth, and nothing in the
//! crate asserts computed output against them.

use chrono::NaiveDate;
use serde::Serialize;

/// One catalogued storm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalEvent {
    pub date: NaiveDate,
    pub name: &'static str,
    /// The normalized index the original analysis claimed for this date.
    pub claimed_normalized_index: f64,
    /// Claimed storm magnitude on the original's 0-10 scale.
    pub claimed_magnitude: f64,
}

fn event(
    year: i32,
    month: u32,
    day: u32,
    name: &'static str,
    claimed_normalized_index: f64,
    claimed_magnitude: f64,
) -> HistoricalEvent {
    HistoricalEvent {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        name,
        claimed_normalized_index,
        claimed_magnitude,
    }
}

/// The five reference storms, in date order.
pub fn reference_events() -> Vec<HistoricalEvent> {
    vec![
        event(1859, 9, 1, "Carrington event", 3.21, 10.0),
        event(1921, 5, 13, "Great storm of 1921", 2.45, 9.0),
        event(1989, 3, 13, "Quebec blackout", 1.89, 8.5),
        event(2003, 10, 29, "Halloween storms", 4.87, 9.5),
        event(2024, 5, 10, "May 2024 storm", 1.34, 8.9),
    ]
}

/// Look up a catalogued storm by date.
pub fn find(date: NaiveDate) -> Option<HistoricalEvent> {
    reference_events().into_iter().find(|e| e.date == date)
}
