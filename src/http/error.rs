//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::FtrtError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (malformed date, out-of-range span)
    BadRequest(String),
    /// The ephemeris collaborator could not supply data
    EphemerisUnavailable(String),
    /// Upstream data integrity failure (degenerate normalization)
    UpstreamData(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::EphemerisUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("EPHEMERIS_UNAVAILABLE", msg),
            ),
            AppError::UpstreamData(msg) => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("UPSTREAM_DATA_ERROR", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<FtrtError> for AppError {
    fn from(err: FtrtError) -> Self {
        match &err {
            FtrtError::InvalidDateFormat { .. } | FtrtError::InvalidForecastSpan { .. } => {
                AppError::BadRequest(err.to_string())
            }
            FtrtError::EphemerisUnavailable { .. } => {
                AppError::EphemerisUnavailable(err.to_string())
            }
            FtrtError::DivisionByZero { .. } => AppError::UpstreamData(err.to_string()),
            FtrtError::Config(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Body;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn test_invalid_date_maps_to_400() {
        let err: AppError = FtrtError::InvalidDateFormat {
            input: "x".to_string(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_forecast_span_maps_to_400() {
        let err: AppError = FtrtError::InvalidForecastSpan {
            days: 91,
            min: 1,
            max: 90,
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ephemeris_unavailable_maps_to_503() {
        let err: AppError = FtrtError::EphemerisUnavailable {
            body: Body::Mars,
            date: date(),
            source: crate::error::EphemerisError::NoData {
                body: Body::Mars,
                date: date(),
            },
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_division_by_zero_maps_to_502() {
        let err: AppError = FtrtError::DivisionByZero { date: date() }.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
