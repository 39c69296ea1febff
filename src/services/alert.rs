//! Alert reports.
//!
//! Condenses a [`TidalIndexResult`] into the operator-facing summary: the
//! tier, whether it crosses the alert line, and the three dominant planetary
//! contributors.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{RiskTier, TidalIndexResult};
use crate::models::Body;

/// Tiers at or above this level raise the alert flag.
pub const ALERT_TIER: RiskTier = RiskTier::Elevated;

/// How many top contributors an alert names.
const TOP_CONTRIBUTORS: usize = 3;

/// One body's share of the raw index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyContribution {
    pub body: Body,
    pub contribution: f64,
}

/// Operator-facing summary of one index computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertReport {
    pub date: NaiveDate,
    pub normalized_index: f64,
    pub risk_tier: RiskTier,
    /// True when `risk_tier` is at or above [`ALERT_TIER`].
    pub alert: bool,
    /// The largest per-body contributions, descending.
    pub top_contributors: Vec<BodyContribution>,
    pub message: String,
}

/// Build an alert report from a computed result.
pub fn build_alert(result: &TidalIndexResult) -> AlertReport {
    let mut ranked: Vec<BodyContribution> = result
        .per_body_contribution
        .iter()
        .map(|(&body, &contribution)| BodyContribution { body, contribution })
        .collect();
    ranked.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(TOP_CONTRIBUTORS);

    let alert = result.risk_tier >= ALERT_TIER;
    let message = format!(
        "FTRT {:.3} on {} - level {}",
        result.normalized_index, result.date, result.risk_tier
    );

    AlertReport {
        date: result.date,
        normalized_index: result.normalized_index,
        risk_tier: result.risk_tier,
        alert,
        top_contributors: ranked,
        message,
    }
}
