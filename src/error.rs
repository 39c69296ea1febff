//! Error types for the tidal-index core.
//!
//! The taxonomy is deliberately small: malformed input dates, a failed or
//! non-physical ephemeris lookup, a degenerate normalization, and
//! configuration problems. The core never suppresses any of these and never
//! returns partial results.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Body;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, FtrtError>;

/// Errors raised by an ephemeris provider.
#[derive(Error, Debug)]
pub enum EphemerisError {
    /// The provider has no entry for this body/date combination.
    #[error("no ephemeris data for {body} on {date}")]
    NoData { body: Body, date: NaiveDate },

    /// The provider backend could not be reached or read.
    #[error("ephemeris source unavailable: {0}")]
    Unavailable(String),

    /// The provider returned a distance that cannot be physical.
    #[error("{body} heliocentric distance on {date} is not physical: {meters} m")]
    NonPhysicalDistance {
        body: Body,
        date: NaiveDate,
        meters: f64,
    },

    /// A distance-table file could not be read.
    #[error("failed to read ephemeris table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A distance-table file could not be parsed.
    #[error("failed to parse ephemeris table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by [`crate::services::TidalIndexCalculator`].
#[derive(Error, Debug)]
pub enum FtrtError {
    /// The input date string is not strict `YYYY-MM-DD`. Caller bug.
    #[error("invalid date format {input:?}, expected YYYY-MM-DD")]
    InvalidDateFormat { input: String },

    /// The ephemeris collaborator failed for one body; the whole call fails.
    #[error("ephemeris unavailable for {body} on {date}: {source}")]
    EphemerisUnavailable {
        body: Body,
        date: NaiveDate,
        source: EphemerisError,
    },

    /// Jupiter's contribution is zero; the normalized index is undefined.
    /// Indicates an upstream data-integrity bug, fatal to this call.
    #[error("division by zero: Jupiter contribution is zero on {date}")]
    DivisionByZero { date: NaiveDate },

    /// The requested forecast span is outside the supported range.
    #[error("forecast span must be between {min} and {max} days, got {days}")]
    InvalidForecastSpan { days: u32, min: u32, max: u32 },

    /// Invalid calculator configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while building or loading [`crate::config::FtrtConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Threshold table is not strictly ascending.
    #[error("risk thresholds must be strictly ascending: {0}")]
    NonAscendingThresholds(String),

    /// A physical constant or threshold is zero, negative, or non-finite.
    #[error("{name} must be strictly positive and finite, got {value}")]
    NonPositiveValue { name: String, value: f64 },

    /// The mass table is missing a body.
    #[error("mass table is missing {body}")]
    MissingMass { body: Body },

    /// A configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
