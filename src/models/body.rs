//! The eight major solar-system bodies contributing to the tidal index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A major planet with a heliocentric orbit.
///
/// Declared in ascending distance from the Sun; the derived `Ord` keeps
/// serialized per-body maps in this stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// All bodies, in orbital order.
    pub const ALL: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Lowercase wire name (`"mercury"`, ..., `"neptune"`).
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Earth => "earth",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
        }
    }

    /// Parse a lowercase wire name.
    pub fn from_name(name: &str) -> Option<Body> {
        Body::ALL.iter().copied().find(|b| b.name() == name)
    }

    /// Planetary mass, NASA reference value.
    pub fn nasa_mass(&self) -> qtty::Kilograms {
        let kg = match self {
            Body::Mercury => 3.3011e23,
            Body::Venus => 4.8675e24,
            Body::Earth => 5.9722e24,
            Body::Mars => 6.4171e23,
            Body::Jupiter => 1.8982e27,
            Body::Saturn => 5.6834e26,
            Body::Uranus => 8.6810e25,
            Body::Neptune => 1.0241e26,
        };
        qtty::Kilograms::new(kg)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
