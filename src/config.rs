//! Calculator configuration.
//!
//! Everything the index formula depends on lives in one immutable
//! [`FtrtConfig`] passed to the calculator at construction: physical
//! constants, the per-body mass table, and the risk-threshold ladder. Tests
//! substitute alternate tables by building their own config instead of
//! monkeypatching globals.
//!
//! Configuration is loadable from TOML:
//!
//! ```toml
//! solar_radius = 6.957e8
//! astronomical_unit = 1.496e11
//!
//! [thresholds]
//! normal = 0.8
//! moderate = 1.2
//! elevated = 1.8
//! critical = 2.5
//!
//! [masses]
//! mercury = 3.3011e23
//! # ... all eight bodies required
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use qtty::{Kilograms, Meters};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Body;

/// Nominal solar radius in meters.
pub const DEFAULT_SOLAR_RADIUS_M: f64 = 6.957e8;

/// Meters per astronomical unit. The normalized index is a ratio and does
/// not depend on this value; raw contributions do.
pub const DEFAULT_ASTRONOMICAL_UNIT_M: f64 = 1.496e11;

/// Ascending risk-tier thresholds over the normalized index.
///
/// Each field is the *exclusive upper bound* of the tier of the same name;
/// `Extreme` has no upper bound. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub normal: f64,
    pub moderate: f64,
    pub elevated: f64,
    pub critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            normal: 0.8,
            moderate: 1.2,
            elevated: 1.8,
            critical: 2.5,
        }
    }
}

impl Thresholds {
    /// Check that all bounds are finite, positive, and strictly ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            ("thresholds.normal", self.normal),
            ("thresholds.moderate", self.moderate),
            ("thresholds.elevated", self.elevated),
            ("thresholds.critical", self.critical),
        ];
        for (name, value) in bounds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveValue {
                    name: name.to_string(),
                    value,
                });
            }
        }
        if !(self.normal < self.moderate && self.moderate < self.elevated && self.elevated < self.critical)
        {
            return Err(ConfigError::NonAscendingThresholds(format!(
                "{} / {} / {} / {}",
                self.normal, self.moderate, self.elevated, self.critical
            )));
        }
        Ok(())
    }
}

/// Immutable calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FtrtConfig {
    /// Solar radius used in the contribution formula, in meters.
    pub solar_radius: Meters,
    /// Meters per astronomical unit, used to convert AU-denominated
    /// ephemeris tables and orbital elements.
    pub astronomical_unit: Meters,
    /// Planetary masses in kilograms. All eight bodies must be present.
    pub masses: BTreeMap<Body, Kilograms>,
    /// Risk-tier threshold ladder.
    pub thresholds: Thresholds,
}

impl Default for FtrtConfig {
    fn default() -> Self {
        Self {
            solar_radius: Meters::new(DEFAULT_SOLAR_RADIUS_M),
            astronomical_unit: Meters::new(DEFAULT_ASTRONOMICAL_UNIT_M),
            masses: Body::ALL.iter().map(|&b| (b, b.nasa_mass())).collect(),
            thresholds: Thresholds::default(),
        }
    }
}

impl FtrtConfig {
    /// Parse and validate a TOML configuration string. Missing sections fall
    /// back to defaults; a present-but-partial mass table is rejected.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: FtrtConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Validate constants, masses, and thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("solar_radius", self.solar_radius.value()),
            ("astronomical_unit", self.astronomical_unit.value()),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveValue {
                    name: name.to_string(),
                    value,
                });
            }
        }
        for body in Body::ALL {
            let mass = self
                .masses
                .get(&body)
                .ok_or(ConfigError::MissingMass { body })?;
            if !mass.value().is_finite() || mass.value() <= 0.0 {
                return Err(ConfigError::NonPositiveValue {
                    name: format!("masses.{body}"),
                    value: mass.value(),
                });
            }
        }
        self.thresholds.validate()
    }

    /// Mass of `body`. Falls back to the NASA reference value for configs
    /// built without [`FtrtConfig::validate`] having run.
    pub fn mass(&self, body: Body) -> Kilograms {
        self.masses
            .get(&body)
            .copied()
            .unwrap_or_else(|| body.nasa_mass())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        FtrtConfig::default().validate().unwrap();
    }

    #[test]
    fn test_default_constants() {
        let config = FtrtConfig::default();
        assert_eq!(config.solar_radius.value(), 6.957e8);
        assert_eq!(config.astronomical_unit.value(), 1.496e11);
        assert_eq!(config.masses.len(), 8);
    }

    #[test]
    fn test_default_thresholds_ladder() {
        let t = Thresholds::default();
        assert_eq!(t.normal, 0.8);
        assert_eq!(t.moderate, 1.2);
        assert_eq!(t.elevated, 1.8);
        assert_eq!(t.critical, 2.5);
    }

    #[test]
    fn test_non_ascending_thresholds_rejected() {
        let t = Thresholds {
            normal: 1.2,
            moderate: 0.8,
            elevated: 1.8,
            critical: 2.5,
        };
        assert!(matches!(
            t.validate(),
            Err(ConfigError::NonAscendingThresholds(_))
        ));
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let t = Thresholds {
            normal: 0.8,
            moderate: 0.8,
            elevated: 1.8,
            critical: 2.5,
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let t = Thresholds {
            normal: -0.1,
            moderate: 1.2,
            elevated: 1.8,
            critical: 2.5,
        };
        assert!(matches!(
            t.validate(),
            Err(ConfigError::NonPositiveValue { .. })
        ));
    }

    #[test]
    fn test_missing_mass_rejected() {
        let mut config = FtrtConfig::default();
        config.masses.remove(&Body::Saturn);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingMass { body: Body::Saturn })
        ));
    }

    #[test]
    fn test_zero_solar_radius_rejected() {
        let config = FtrtConfig {
            solar_radius: Meters::new(0.0),
            ..FtrtConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = FtrtConfig::from_toml_str("").unwrap();
        assert_eq!(config, FtrtConfig::default());
    }

    #[test]
    fn test_toml_overrides_thresholds() {
        let config = FtrtConfig::from_toml_str(
            r#"
            [thresholds]
            normal = 0.5
            moderate = 1.0
            elevated = 1.5
            critical = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(config.thresholds.normal, 0.5);
        assert_eq!(config.thresholds.critical, 2.0);
        // Untouched sections keep defaults
        assert_eq!(config.masses.len(), 8);
    }

    #[test]
    fn test_toml_partial_mass_table_rejected() {
        let result = FtrtConfig::from_toml_str(
            r#"
            [masses]
            mercury = 3.3011e23
            "#,
        );
        assert!(matches!(result, Err(ConfigError::MissingMass { .. })));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FtrtConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed = FtrtConfig::from_toml_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
