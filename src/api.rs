//! Public result types for the tidal-index API.
//!
//! Everything here is serde-serializable so surrounding layers (HTTP, CLI,
//! reports) can emit results without further core-side formatting.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Body;

// Re-export service-layer report types at the API surface.
pub use crate::history::HistoricalEvent;
pub use crate::services::alert::{AlertReport, BodyContribution};
pub use crate::services::forecast::{DailyIndex, Forecast};

/// Ordered risk classification of a normalized tidal index.
///
/// Derived `Ord` follows declaration order, so `Normal < ... < Extreme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Normal,
    Moderate,
    Elevated,
    Critical,
    Extreme,
}

impl RiskTier {
    /// Numeric rank, ascending with severity.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Wire name (`"NORMAL"`, ..., `"EXTREME"`).
    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Normal => "NORMAL",
            RiskTier::Moderate => "MODERATE",
            RiskTier::Elevated => "ELEVATED",
            RiskTier::Critical => "CRITICAL",
            RiskTier::Extreme => "EXTREME",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One complete index computation for a single date.
///
/// Immutable once returned; computed fresh per query and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidalIndexResult {
    /// The queried date.
    pub date: NaiveDate,
    /// Raw contribution of each body: `mass * solar_radius / distance³`.
    pub per_body_contribution: BTreeMap<Body, f64>,
    /// Sum of all per-body contributions.
    pub total_raw: f64,
    /// `total_raw` normalized by Jupiter's contribution.
    pub normalized_index: f64,
    /// Tier assigned to `normalized_index` by the configured thresholds.
    pub risk_tier: RiskTier,
}

impl TidalIndexResult {
    /// Contribution of one body, if present.
    pub fn contribution(&self, body: Body) -> Option<f64> {
        self.per_body_contribution.get(&body).copied()
    }
}
