//! Multi-day forecast sweeps.
//!
//! Computes the index for each day of a span, tracks the peak, and collects
//! the days that cross the alert line. Any single-day failure aborts the
//! whole sweep; a forecast is never partially fabricated.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::RiskTier;
use crate::ephemeris::EphemerisProvider;
use crate::error::{FtrtError, Result};

use super::alert::ALERT_TIER;
use super::TidalIndexCalculator;

/// Shortest supported forecast span, in days.
pub const MIN_FORECAST_DAYS: u32 = 1;
/// Longest supported forecast span, in days.
pub const MAX_FORECAST_DAYS: u32 = 90;

/// One day of a forecast sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyIndex {
    pub date: NaiveDate,
    pub normalized_index: f64,
    pub risk_tier: RiskTier,
}

/// A completed sweep over `days` consecutive days starting at `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub start: NaiveDate,
    pub days: u32,
    pub daily: Vec<DailyIndex>,
    /// The first day attaining the maximum normalized index.
    pub peak: DailyIndex,
    /// Days whose tier is at or above the alert line, in date order.
    pub alerts: Vec<DailyIndex>,
}

/// Sweep `days` consecutive days starting at `start`.
pub fn forecast_range(
    calculator: &TidalIndexCalculator,
    provider: &dyn EphemerisProvider,
    start: NaiveDate,
    days: u32,
) -> Result<Forecast> {
    if !(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&days) {
        return Err(FtrtError::InvalidForecastSpan {
            days,
            min: MIN_FORECAST_DAYS,
            max: MAX_FORECAST_DAYS,
        });
    }

    let mut daily = Vec::with_capacity(days as usize);
    let mut alerts = Vec::new();
    let mut peak: Option<DailyIndex> = None;

    for offset in 0..days {
        let date = start + Duration::days(i64::from(offset));
        let result = calculator.compute(provider, date)?;
        let day = DailyIndex {
            date,
            normalized_index: result.normalized_index,
            risk_tier: result.risk_tier,
        };

        match peak {
            Some(current) if day.normalized_index <= current.normalized_index => {}
            _ => peak = Some(day),
        }
        if day.risk_tier >= ALERT_TIER {
            alerts.push(day);
        }
        daily.push(day);
    }

    let peak = peak.ok_or(FtrtError::InvalidForecastSpan {
        days,
        min: MIN_FORECAST_DAYS,
        max: MAX_FORECAST_DAYS,
    })?;

    Ok(Forecast {
        start,
        days,
        daily,
        peak,
        alerts,
    })
}
