//! Payroll Engine HTTP server.
//!
//! Reads `PAYROLL_CONFIG_DIR` (default `./config/vn2024`) and
//! `PAYROLL_BIND_ADDR` (default `127.0.0.1:3000`). Log filtering follows
//! `RUST_LOG`, falling back to `info`.

use std::env;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/vn2024";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load rate table from {}", config_dir))?;
    info!(
        config_dir = %config_dir,
        rate_table = %config.rates().metadata.code,
        effective_date = %config.rates().metadata.effective_date,
        "Rate table loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!(addr = %bind_addr, "Payroll engine listening");

    axum::serve(listener, app).await?;

    Ok(())
}
