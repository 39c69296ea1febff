//! The tidal-index calculator.
//!
//! Implements the FTRT pipeline: look up heliocentric distances for the
//! eight planets, form per-body contributions with an inverse-cube law, sum,
//! normalize against Jupiter, classify. The computation is deterministic and
//! side-effect-free given identical ephemeris responses; it either yields a
//! complete result covering all eight bodies or fails entirely.
//!
//! The inverse-cube law makes the index highly sensitive near perihelion
//! passages: small distance changes dominate the result.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;

use crate::api::{RiskTier, TidalIndexResult};
use crate::config::FtrtConfig;
use crate::ephemeris::{EphemerisProvider, MeanOrbitEphemeris};
use crate::error::{ConfigError, EphemerisError, FtrtError, Result};
use crate::models::{parse_iso_date, Body};

use super::classify::classify;

/// Pure date → [`TidalIndexResult`] calculator.
pub struct TidalIndexCalculator {
    config: FtrtConfig,
    approximate: MeanOrbitEphemeris,
}

impl TidalIndexCalculator {
    /// Build a calculator from a validated configuration.
    pub fn new(config: FtrtConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let approximate = MeanOrbitEphemeris::new(config.astronomical_unit);
        Ok(Self {
            config,
            approximate,
        })
    }

    /// The configuration this calculator was built with.
    pub fn config(&self) -> &FtrtConfig {
        &self.config
    }

    /// Compute the index for `date` using `provider` for positions.
    ///
    /// Fails with [`FtrtError::EphemerisUnavailable`] on the first body the
    /// provider cannot supply a physical distance for, or with
    /// [`FtrtError::DivisionByZero`] when Jupiter's distance or contribution
    /// degenerates. No partial results.
    pub fn compute(
        &self,
        provider: &dyn EphemerisProvider,
        date: NaiveDate,
    ) -> Result<TidalIndexResult> {
        let mut per_body_contribution = BTreeMap::new();

        for body in Body::ALL {
            let distance = provider
                .heliocentric_distance(body, date)
                .map_err(|source| FtrtError::EphemerisUnavailable { body, date, source })?;
            let contribution = self.body_contribution(body, date, distance.value())?;
            per_body_contribution.insert(body, contribution);
        }

        let total_raw: f64 = per_body_contribution.values().sum();
        let jupiter = per_body_contribution
            .get(&Body::Jupiter)
            .copied()
            .unwrap_or(0.0);
        if jupiter == 0.0 || !jupiter.is_finite() {
            return Err(FtrtError::DivisionByZero { date });
        }

        let normalized_index = total_raw / jupiter;
        let risk_tier = self.classify(normalized_index);
        debug!(
            "tidal index for {date}: {normalized_index:.3} ({risk_tier}) via {}",
            provider.source()
        );

        Ok(TidalIndexResult {
            date,
            per_body_contribution,
            total_raw,
            normalized_index,
            risk_tier,
        })
    }

    /// Compute for a strict `YYYY-MM-DD` date string.
    pub fn compute_iso(
        &self,
        provider: &dyn EphemerisProvider,
        date: &str,
    ) -> Result<TidalIndexResult> {
        let date = parse_iso_date(date)?;
        self.compute(provider, date)
    }

    /// Compute using the built-in mean-orbit approximation.
    ///
    /// This is the separately-named degraded-precision path: it never runs
    /// unless the caller asks for it by name, so a precise `compute` can
    /// never silently fall back to it.
    pub fn compute_approximate(&self, date: NaiveDate) -> Result<TidalIndexResult> {
        self.compute(&self.approximate, date)
    }

    /// Classify a normalized index with this calculator's thresholds.
    pub fn classify(&self, normalized_index: f64) -> RiskTier {
        classify(&self.config.thresholds, normalized_index)
    }

    /// `mass * solar_radius / distance³` for one body.
    ///
    /// A non-positive or non-finite distance is a provider data error: for
    /// Jupiter it surfaces as the degenerate-normalization failure, for any
    /// other body as an unavailable ephemeris.
    fn body_contribution(&self, body: Body, date: NaiveDate, distance_m: f64) -> Result<f64> {
        if !distance_m.is_finite() || distance_m <= 0.0 {
            if body == Body::Jupiter {
                return Err(FtrtError::DivisionByZero { date });
            }
            return Err(FtrtError::EphemerisUnavailable {
                body,
                date,
                source: EphemerisError::NonPhysicalDistance {
                    body,
                    date,
                    meters: distance_m,
                },
            });
        }

        let mass = self.config.mass(body).value();
        let contribution = mass * self.config.solar_radius.value() / distance_m.powi(3);
        if !contribution.is_finite() || contribution <= 0.0 {
            return Err(FtrtError::EphemerisUnavailable {
                body,
                date,
                source: EphemerisError::NonPhysicalDistance {
                    body,
                    date,
                    meters: distance_m,
                },
            });
        }
        Ok(contribution)
    }
}
