//! Data Transfer Objects for the HTTP API.
//!
//! Core result types already derive Serialize/Deserialize and are re-exported
//! here; the wrappers below add the provenance fields (`ephemeris_source`,
//! `approximate`) so a caller can always tell where a number came from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing API types that are already serializable
pub use crate::api::{
    AlertReport, BodyContribution, DailyIndex, Forecast, HistoricalEvent, RiskTier,
    TidalIndexResult,
};

/// Which compute pipeline a request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeMode {
    /// The configured ephemeris provider.
    #[default]
    Precise,
    /// The explicitly-labeled mean-orbit approximation.
    Approximate,
}

/// Query parameters for index and alert endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModeQuery {
    #[serde(default)]
    pub mode: ComputeMode,
}

/// Query parameters for the forecast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastQuery {
    /// First day of the sweep (default: today, UTC).
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub mode: ComputeMode,
}

/// Full index result plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    #[serde(flatten)]
    pub result: TidalIndexResult,
    /// Label of the ephemeris source that supplied the distances.
    pub ephemeris_source: String,
    /// True when the result came from a degraded-precision provider.
    pub approximate: bool,
}

/// Alert report plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertResponse {
    #[serde(flatten)]
    pub report: AlertReport,
    pub ephemeris_source: String,
    pub approximate: bool,
}

/// Forecast sweep plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(flatten)]
    pub forecast: Forecast,
    pub ephemeris_source: String,
    pub approximate: bool,
}

/// Historical catalog response.
#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    pub events: Vec<HistoricalEvent>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Label of the configured ephemeris source
    pub ephemeris_source: String,
}
