//! Launch Dashboard HTTP Server Binary
//!
//! Loads configuration, builds the site catalog and the static map, then
//! serves the dashboard page and its JSON API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin launch-dashboard-server
//!
//! # With a custom catalog / settings file
//! DASHBOARD_CONFIG=./dashboard.toml cargo run --bin launch-dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `DASHBOARD_CONFIG`: Path to a dashboard TOML file (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dashboard::config::ServerConfig;
use launch_dashboard::http::{create_router, AppState};
use launch_dashboard::services::Dashboard;

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
        .with_thread_ids(true)
        .init();

    info!("Starting Launch Dashboard server");

    let server_config = ServerConfig::from_env()?;
    let dashboard_config = server_config.load_dashboard_config()?;

    // Invalid or empty catalogs stop here, before any page is served.
    let dashboard = Dashboard::from_config(&dashboard_config)?.into_shared();
    info!(
        "Loaded {} launch sites, initial selection '{}'",
        dashboard.catalog().len(),
        dashboard.initial_site()
    );

    let state = AppState::new(dashboard);
    let app = create_router(state);

    let addr = server_config.socket_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
