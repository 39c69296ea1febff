//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Computation is synchronous CPU work plus a potentially blocking
//! ephemeris lookup, so handlers run it under `spawn_blocking`. A failed
//! lookup is surfaced as an error response; no handler ever fabricates a
//! numeric result.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use super::dto::{
    AlertResponse, ComputeMode, EventsResponse, Forecast, ForecastQuery, ForecastResponse,
    HealthResponse, IndexResponse, ModeQuery, TidalIndexResult,
};
use super::error::AppError;
use super::state::AppState;
use crate::ephemeris::{mean_orbit, EphemerisProvider};
use crate::history;
use crate::models::parse_iso_date;
use crate::services::{build_alert, forecast_range};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run one compute in a blocking task, returning the result with provenance.
async fn compute_with_mode(
    state: AppState,
    date: NaiveDate,
    mode: ComputeMode,
) -> Result<(TidalIndexResult, String, bool), AppError> {
    tokio::task::spawn_blocking(move || match mode {
        ComputeMode::Precise => {
            let result = state.calculator.compute(state.provider.as_ref(), date)?;
            Ok((
                result,
                state.provider.source().to_string(),
                state.provider.is_approximate(),
            ))
        }
        ComputeMode::Approximate => {
            let result = state.calculator.compute_approximate(date)?;
            Ok((result, mean_orbit::SOURCE.to_string(), true))
        }
    })
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {e}")))?
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the configured ephemeris source.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        ephemeris_source: state.provider.source().to_string(),
    }))
}

// =============================================================================
// Index
// =============================================================================

/// GET /v1/index/{date}
///
/// Compute the tidal index for a date. `?mode=approximate` selects the
/// labeled mean-orbit pipeline.
pub async fn get_index(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(query): Query<ModeQuery>,
) -> HandlerResult<IndexResponse> {
    let date = parse_iso_date(&date)?;
    let (result, ephemeris_source, approximate) =
        compute_with_mode(state, date, query.mode).await?;
    Ok(Json(IndexResponse {
        result,
        ephemeris_source,
        approximate,
    }))
}

/// GET /v1/index/current
///
/// Compute the tidal index for today (UTC).
pub async fn get_current_index(
    State(state): State<AppState>,
    Query(query): Query<ModeQuery>,
) -> HandlerResult<IndexResponse> {
    let date = Utc::now().date_naive();
    let (result, ephemeris_source, approximate) =
        compute_with_mode(state, date, query.mode).await?;
    Ok(Json(IndexResponse {
        result,
        ephemeris_source,
        approximate,
    }))
}

// =============================================================================
// Alert
// =============================================================================

/// GET /v1/alert/{date}
///
/// Alert summary for a date: tier, alert flag, top contributors.
pub async fn get_alert(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(query): Query<ModeQuery>,
) -> HandlerResult<AlertResponse> {
    let date = parse_iso_date(&date)?;
    let (result, ephemeris_source, approximate) =
        compute_with_mode(state, date, query.mode).await?;
    Ok(Json(AlertResponse {
        report: build_alert(&result),
        ephemeris_source,
        approximate,
    }))
}

// =============================================================================
// Forecast
// =============================================================================

/// GET /v1/forecast/{days}
///
/// Daily index sweep over 1..=90 days starting at `?start` (default today).
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(days): Path<u32>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<ForecastResponse> {
    let start = query.start.unwrap_or_else(|| Utc::now().date_naive());
    let mode = query.mode;

    let (forecast, ephemeris_source, approximate) = tokio::task::spawn_blocking(
        move || -> Result<(Forecast, String, bool), AppError> {
            match mode {
                ComputeMode::Precise => {
                    let forecast = forecast_range(
                        &state.calculator,
                        state.provider.as_ref(),
                        start,
                        days,
                    )?;
                    Ok((
                        forecast,
                        state.provider.source().to_string(),
                        state.provider.is_approximate(),
                    ))
                }
                ComputeMode::Approximate => {
                    let approx = crate::ephemeris::MeanOrbitEphemeris::new(
                        state.calculator.config().astronomical_unit,
                    );
                    let forecast = forecast_range(&state.calculator, &approx, start, days)?;
                    Ok((forecast, mean_orbit::SOURCE.to_string(), true))
                }
            }
        },
    )
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {e}")))??;

    Ok(Json(ForecastResponse {
        forecast,
        ephemeris_source,
        approximate,
    }))
}

// =============================================================================
// Historical events
// =============================================================================

/// GET /v1/events
///
/// The historical storm catalog (illustrative fixture data).
pub async fn list_events(State(_state): State<AppState>) -> HandlerResult<EventsResponse> {
    let events = history::reference_events();
    let total = events.len();
    Ok(Json(EventsResponse { events, total }))
}
