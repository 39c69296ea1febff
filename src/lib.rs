//! # FTRT Rust Backend
//!
//! Planetary tidal-force index (FTRT) computation engine.
//!
//! This crate computes a scalar index for a civil date from the heliocentric
//! distances of the eight major planets, classifies it into ordered risk
//! tiers, and exposes the result through a small REST API. The index sums an
//! inverse-cube term `mass * solar_radius / distance³` over all bodies and
//! normalizes against Jupiter's term. No physical mechanism is claimed; the
//! value of the crate is a precisely specified, reproducible computation
//! with honest failure modes.
//!
//! ## Architecture
//!
//! - [`api`]: public result types (tiers, index results, reports)
//! - [`config`]: the immutable configuration the calculator is built from
//! - [`ephemeris`]: the provider seam plus table and mean-orbit providers
//! - [`services`]: calculator, classification, alerts, forecasts
//! - [`history`]: historical storm catalog (fixture data)
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! ## Guarantees
//!
//! - `compute` is deterministic and side-effect-free given identical
//!   ephemeris responses.
//! - A call either yields contributions for all eight bodies or fails; there
//!   are no partial results and no silent fallback to approximate data.
//! - Approximate mode exists, but only behind a separately-named operation
//!   and an `approximate` label on every response that used it.

pub mod api;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod history;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
