// Shared fixtures; not every test crate uses every helper.
#![allow(dead_code)]

use chrono::NaiveDate;

use ftrt_rust::config::FtrtConfig;
use ftrt_rust::ephemeris::TableEphemeris;
use ftrt_rust::models::Body;
use ftrt_rust::services::TidalIndexCalculator;

/// Calculator with the canonical configuration.
pub fn reference_calculator() -> TidalIndexCalculator {
    TidalIndexCalculator::new(FtrtConfig::default()).expect("default config is valid")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// The 2024-05-10 reference table with one body's distance overridden.
pub fn may_2024_with_override(body: Body, distance_au: f64) -> TableEphemeris {
    let mut table = TableEphemeris::may_2024_storm();
    table.insert(date(2024, 5, 10), body, distance_au);
    table
}
