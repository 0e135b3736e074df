//! HTTP server command
//!
//! Connects to PostgreSQL, confirms the connection, and serves the
//! baby name API until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use babyctl_server::db::{create_pool, ping, PgNameStore};
use babyctl_server::{run_server, AppState, DatabaseConfig, ServerConfig};

use super::db_args::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BABYCTL_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DatabaseConfig::from(args.db);
    tracing::debug!(?db_config, "database configuration");

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;
    ping(&pool).await.context("Database connection failed")?;
    tracing::info!("Database connection is successful");

    let config = ServerConfig {
        bind_addr: args.bind,
    };
    let state = AppState::new(PgNameStore::new(pool));

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
