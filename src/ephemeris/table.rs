//! Static per-date distance tables.
//!
//! Tables hold heliocentric distances in astronomical units keyed by
//! `(date, body)`. They back the precalculated historical storm dates and
//! give tests full control over provider behavior. Lookups for dates the
//! table does not cover fail with [`EphemerisError::NoData`]; a table is an
//! override path, not a cache, and never interpolates.
//!
//! Tables can be loaded from TOML:
//!
//! ```toml
//! [days."2003-10-29"]
//! mercury = 0.452
//! venus = 0.721
//! # ... remaining bodies
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use qtty::Meters;
use serde::Deserialize;

use crate::config::DEFAULT_ASTRONOMICAL_UNIT_M;
use crate::error::EphemerisError;
use crate::models::Body;

use super::EphemerisProvider;

/// Ephemeris provider backed by a static distance table.
#[derive(Debug, Clone)]
pub struct TableEphemeris {
    source: String,
    meters_per_au: f64,
    days: BTreeMap<NaiveDate, BTreeMap<Body, f64>>,
}

#[derive(Debug, Deserialize)]
struct TableFile {
    days: BTreeMap<NaiveDate, BTreeMap<Body, f64>>,
}

impl TableEphemeris {
    /// Empty table with the given source label.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            meters_per_au: DEFAULT_ASTRONOMICAL_UNIT_M,
            days: BTreeMap::new(),
        }
    }

    /// Override the AU-to-meters conversion constant (from
    /// [`crate::config::FtrtConfig::astronomical_unit`]).
    pub fn with_meters_per_au(mut self, meters: Meters) -> Self {
        self.meters_per_au = meters.value();
        self
    }

    /// Insert one body's distance (in AU) for a date. Values are stored
    /// verbatim; validity is the calculator's concern, so tests can inject
    /// degenerate data.
    pub fn insert(&mut self, date: NaiveDate, body: Body, distance_au: f64) {
        self.days.entry(date).or_default().insert(body, distance_au);
    }

    /// Insert a full day of distances (in AU).
    pub fn insert_day<I>(&mut self, date: NaiveDate, distances_au: I)
    where
        I: IntoIterator<Item = (Body, f64)>,
    {
        let day = self.days.entry(date).or_default();
        for (body, au) in distances_au {
            day.insert(body, au);
        }
    }

    /// Parse a TOML distance table.
    pub fn from_toml_str(source: impl Into<String>, input: &str) -> Result<Self, EphemerisError> {
        let file: TableFile = toml::from_str(input)?;
        Ok(Self {
            source: source.into(),
            meters_per_au: DEFAULT_ASTRONOMICAL_UNIT_M,
            days: file.days,
        })
    }

    /// Load a TOML distance table from disk. The file path doubles as the
    /// source label.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EphemerisError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| EphemerisError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(path.display().to_string(), &raw)
    }

    /// Dates covered by this table.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Table for the 2003-10-29 Halloween-storm reference date.
    pub fn halloween_storm_2003() -> Self {
        let mut table = Self::new("halloween-2003-table");
        if let Some(date) = NaiveDate::from_ymd_opt(2003, 10, 29) {
            table.insert_day(
                date,
                [
                    (Body::Mercury, 0.452),
                    (Body::Venus, 0.721),
                    (Body::Earth, 0.993),
                    (Body::Mars, 0.464),
                    (Body::Jupiter, 4.951),
                    (Body::Saturn, 8.513),
                    (Body::Uranus, 19.812),
                    (Body::Neptune, 29.934),
                ],
            );
        }
        table
    }

    /// Table for the 2024-05-10 storm reference date.
    pub fn may_2024_storm() -> Self {
        let mut table = Self::new("may-2024-table");
        if let Some(date) = NaiveDate::from_ymd_opt(2024, 5, 10) {
            table.insert_day(
                date,
                [
                    (Body::Mercury, 0.548),
                    (Body::Venus, 1.087),
                    (Body::Earth, 1.009),
                    (Body::Mars, 1.692),
                    (Body::Jupiter, 5.327),
                    (Body::Saturn, 10.074),
                    (Body::Uranus, 19.992),
                    (Body::Neptune, 30.127),
                ],
            );
        }
        table
    }
}

impl EphemerisProvider for TableEphemeris {
    fn heliocentric_distance(&self, body: Body, date: NaiveDate) -> Result<Meters, EphemerisError> {
        let au = self
            .days
            .get(&date)
            .and_then(|day| day.get(&body))
            .copied()
            .ok_or(EphemerisError::NoData { body, date })?;
        Ok(Meters::new(au * self.meters_per_au))
    }

    fn source(&self) -> &str {
        &self.source
    }
}
