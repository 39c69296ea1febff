//! FTRT HTTP Server Binary
//!
//! Main entry point for the FTRT REST API server. It loads the calculator
//! configuration, selects an ephemeris provider, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the mean-orbit approximate provider (default)
//! cargo run --bin ftrt-server
//!
//! # Run against a static distance table
//! FTRT_EPHEMERIS=table:distances.toml cargo run --bin ftrt-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `FTRT_CONFIG`: Optional path to a TOML calculator configuration
//! - `FTRT_EPHEMERIS`: `mean-orbit` (default) or `table:<path>`
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use ftrt_rust::config::FtrtConfig;
use ftrt_rust::ephemeris::{EphemerisProvider, MeanOrbitEphemeris, TableEphemeris};
use ftrt_rust::http::{create_router, AppState};
use ftrt_rust::services::TidalIndexCalculator;

fn load_config() -> anyhow::Result<FtrtConfig> {
    match env::var("FTRT_CONFIG") {
        Ok(path) => FtrtConfig::from_file(&path)
            .with_context(|| format!("loading FTRT_CONFIG from {path}")),
        Err(_) => Ok(FtrtConfig::default()),
    }
}

fn select_provider(config: &FtrtConfig) -> anyhow::Result<Arc<dyn EphemerisProvider>> {
    let selector = env::var("FTRT_EPHEMERIS").unwrap_or_else(|_| "mean-orbit".to_string());
    if selector == "mean-orbit" {
        warn!("serving with the mean-orbit approximation; results are labeled approximate");
        return Ok(Arc::new(MeanOrbitEphemeris::new(config.astronomical_unit)));
    }
    if let Some(path) = selector.strip_prefix("table:") {
        let table = TableEphemeris::from_file(path)
            .with_context(|| format!("loading ephemeris table from {path}"))?
            .with_meters_per_au(config.astronomical_unit);
        return Ok(Arc::new(table));
    }
    anyhow::bail!("unsupported FTRT_EPHEMERIS '{selector}'; use mean-orbit or table:<path>")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting FTRT HTTP Server");

    let config = load_config()?;
    let provider = select_provider(&config)?;
    info!("Ephemeris source: {}", provider.source());

    let calculator = Arc::new(TidalIndexCalculator::new(config)?);

    // Create application state and router
    let state = AppState::new(calculator, provider);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
