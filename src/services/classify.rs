//! Risk-tier classification.
//!
//! A pure, total function from normalized index to tier: the lowest tier
//! whose exclusive upper bound is not exceeded wins, and the highest tier
//! has no upper bound. Lower bounds are inclusive, so an index exactly on a
//! boundary lands in the higher tier.

use crate::api::RiskTier;
use crate::config::Thresholds;

/// Classify a normalized index against an ascending threshold ladder.
///
/// Total over all `f64` inputs; non-finite values saturate to
/// [`RiskTier::Extreme`] (the calculator rejects them before they get here).
pub fn classify(thresholds: &Thresholds, normalized_index: f64) -> RiskTier {
    if normalized_index < thresholds.normal {
        RiskTier::Normal
    } else if normalized_index < thresholds.moderate {
        RiskTier::Moderate
    } else if normalized_index < thresholds.elevated {
        RiskTier::Elevated
    } else if normalized_index < thresholds.critical {
        RiskTier::Critical
    } else {
        RiskTier::Extreme
    }
}
