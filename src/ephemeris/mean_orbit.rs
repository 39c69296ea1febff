//! Mean-orbit approximate ephemeris.
//!
//! Models each orbit as its mean radius modulated by a first-order
//! eccentricity term: `r = a * (1 - e * cos(2π * t / T))` with `t` counted in
//! days from J2000 (2000-01-01). The phase is referenced to J2000, not fitted
//! to true perihelion passages, so individual distances can be off by the
//! full width of the eccentricity term. This mode trades accuracy for
//! availability and says so: [`EphemerisProvider::is_approximate`] is `true`
//! and results carry the [`SOURCE`] label.

use chrono::{Datelike, NaiveDate};
use qtty::Meters;

use crate::config::DEFAULT_ASTRONOMICAL_UNIT_M;
use crate::error::EphemerisError;
use crate::models::Body;

use super::EphemerisProvider;

/// Source label attached to every approximate result.
pub const SOURCE: &str = "mean-orbit-approximation";

/// Days from 0001-01-01 (CE) to 2000-01-01, the phase reference epoch.
const J2000_DAYS_FROM_CE: i64 = 730_120;

/// Mean orbital elements: semi-major axis (AU), eccentricity, sidereal
/// period (days).
struct Elements {
    semi_major_au: f64,
    eccentricity: f64,
    period_days: f64,
}

fn elements(body: Body) -> Elements {
    let (semi_major_au, eccentricity, period_days) = match body {
        Body::Mercury => (0.387098, 0.205630, 87.9691),
        Body::Venus => (0.723332, 0.006772, 224.701),
        Body::Earth => (1.000000, 0.016709, 365.256),
        Body::Mars => (1.523679, 0.093400, 686.980),
        Body::Jupiter => (5.204400, 0.048900, 4332.59),
        Body::Saturn => (9.582600, 0.056500, 10759.22),
        Body::Uranus => (19.218400, 0.046400, 30688.5),
        Body::Neptune => (30.110000, 0.009500, 60182.0),
    };
    Elements {
        semi_major_au,
        eccentricity,
        period_days,
    }
}

/// The explicit approximate ephemeris mode.
#[derive(Debug, Clone)]
pub struct MeanOrbitEphemeris {
    meters_per_au: f64,
}

impl Default for MeanOrbitEphemeris {
    fn default() -> Self {
        Self {
            meters_per_au: DEFAULT_ASTRONOMICAL_UNIT_M,
        }
    }
}

impl MeanOrbitEphemeris {
    /// Build with an explicit AU-to-meters constant (from
    /// [`crate::config::FtrtConfig::astronomical_unit`]).
    pub fn new(astronomical_unit: Meters) -> Self {
        Self {
            meters_per_au: astronomical_unit.value(),
        }
    }

    fn distance_au(body: Body, date: NaiveDate) -> f64 {
        let el = elements(body);
        let t = (i64::from(date.num_days_from_ce()) - J2000_DAYS_FROM_CE) as f64;
        let phase = std::f64::consts::TAU * (t / el.period_days);
        el.semi_major_au * (1.0 - el.eccentricity * phase.cos())
    }
}

impl EphemerisProvider for MeanOrbitEphemeris {
    fn heliocentric_distance(&self, body: Body, date: NaiveDate) -> Result<Meters, EphemerisError> {
        Ok(Meters::new(
            Self::distance_au(body, date) * self.meters_per_au,
        ))
    }

    fn source(&self) -> &str {
        SOURCE
    }

    fn is_approximate(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_j2000_epoch_constant() {
        let j2000 = date(2000, 1, 1);
        assert_eq!(i64::from(j2000.num_days_from_ce()), J2000_DAYS_FROM_CE);
    }

    #[test]
    fn test_distance_at_epoch_is_perihelion_form() {
        // At t = 0 the cosine is 1, so r = a * (1 - e).
        for body in Body::ALL {
            let el = elements(body);
            let r = MeanOrbitEphemeris::distance_au(body, date(2000, 1, 1));
            assert!((r - el.semi_major_au * (1.0 - el.eccentricity)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_distances_stay_in_orbital_band() {
        let provider = MeanOrbitEphemeris::default();
        for body in Body::ALL {
            let el = elements(body);
            let min = el.semi_major_au * (1.0 - el.eccentricity) * DEFAULT_ASTRONOMICAL_UNIT_M;
            let max = el.semi_major_au * (1.0 + el.eccentricity) * DEFAULT_ASTRONOMICAL_UNIT_M;
            for offset in [0i32, 37, 365, 4000, 30000] {
                let d = date(2000, 1, 1) + chrono::Duration::days(i64::from(offset));
                let r = provider.heliocentric_distance(body, d).unwrap().value();
                assert!(r >= min - 1.0 && r <= max + 1.0, "{body} at {d}: {r}");
                assert!(r > 0.0);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let provider = MeanOrbitEphemeris::default();
        let d = date(2024, 5, 10);
        for body in Body::ALL {
            let a = provider.heliocentric_distance(body, d).unwrap();
            let b = provider.heliocentric_distance(body, d).unwrap();
            assert_eq!(a.value().to_bits(), b.value().to_bits());
        }
    }

    #[test]
    fn test_pre_epoch_dates_work() {
        let provider = MeanOrbitEphemeris::default();
        let r = provider
            .heliocentric_distance(Body::Jupiter, date(1859, 9, 1))
            .unwrap();
        assert!(r.value() > 0.0);
    }

    #[test]
    fn test_labeled_approximate() {
        let provider = MeanOrbitEphemeris::default();
        assert!(provider.is_approximate());
        assert_eq!(provider.source(), SOURCE);
    }
}
