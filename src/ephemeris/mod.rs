//! Ephemeris provider seam.
//!
//! The calculator consumes heliocentric distances through the
//! [`EphemerisProvider`] trait and does not care what backs it: a precision
//! ephemeris, a remote service, or a static table. Two implementations ship
//! with the crate:
//!
//! - [`TableEphemeris`]: static per-date distance tables, used for the
//!   precalculated historical storm dates and as the test fixture vehicle.
//! - [`MeanOrbitEphemeris`]: a mean-orbit approximation that is *always*
//!   available but explicitly labeled approximate. It is never substituted
//!   silently; callers opt in through the separately-named approximate
//!   compute path.

use chrono::NaiveDate;
use qtty::Meters;

use crate::error::EphemerisError;
use crate::models::Body;

pub mod mean_orbit;
pub mod table;

pub use mean_orbit::MeanOrbitEphemeris;
pub use table::TableEphemeris;

/// Source of heliocentric distances, the core's single external dependency.
pub trait EphemerisProvider: Send + Sync {
    /// Heliocentric distance of `body` at civil `date`.
    ///
    /// Implementations should return strictly positive, finite distances;
    /// the calculator treats anything else as a provider data error.
    fn heliocentric_distance(&self, body: Body, date: NaiveDate) -> Result<Meters, EphemerisError>;

    /// Short identifier of the backing data source, surfaced to callers so
    /// they always know where a number came from.
    fn source(&self) -> &str;

    /// Whether this provider trades precision for availability. Approximate
    /// results must never masquerade as precise ones.
    fn is_approximate(&self) -> bool {
        false
    }
}
