//! Launch dashboard HTTP server binary
//!
//! Loads the launch records table once, builds the shared dashboard context
//! and serves the chart endpoints.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin launch-dash-server
//!
//! DATASET_PATH=data/spacex_launch_dash.csv PORT=9000 \
//!   cargo run --bin launch-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATASET_PATH`: Launch records CSV (default: spacex_launch_dash.csv)
//! - `RUST_LOG`: Log level (default: info)
//!
//! Values from `dashboard.toml` are used when present; environment variables
//! take precedence.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dash::config::DashboardConfig;
use launch_dash::context::DashboardContext;
use launch_dash::http::{create_router, AppState};

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

    info!("Starting launch dashboard server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    // A missing or malformed dataset aborts startup
    let context = DashboardContext::load(&config.dataset.path).with_context(|| {
        format!(
            "Failed to load launch records from {}",
            config.dataset.path.display()
        )
    })?;
    info!(
        "Dataset ready: {} records, {} sites",
        context.dataset().len(),
        context.catalog().len().saturating_sub(1)
    );

    let state = AppState::new(Arc::new(context));
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
