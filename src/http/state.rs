//! Application state for the HTTP server.

use std::sync::Arc;

use crate::ephemeris::EphemerisProvider;
use crate::services::TidalIndexCalculator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Calculator built from the immutable server configuration
    pub calculator: Arc<TidalIndexCalculator>,
    /// Ephemeris source used by the precise compute path
    pub provider: Arc<dyn EphemerisProvider>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(calculator: Arc<TidalIndexCalculator>, provider: Arc<dyn EphemerisProvider>) -> Self {
        Self {
            calculator,
            provider,
        }
    }
}
