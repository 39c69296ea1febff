//! Business logic: index computation, classification, alerts, forecasts.

pub mod alert;
pub mod calculator;
pub mod classify;
pub mod forecast;

pub use alert::build_alert;
pub use calculator::TidalIndexCalculator;
pub use classify::classify;
pub use forecast::forecast_range;
