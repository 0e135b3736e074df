//! Connectivity check command

use anyhow::{Context, Result};
use clap::Parser;

use babyctl_server::db::{create_pool, ping};
use babyctl_server::DatabaseConfig;

use super::db_args::DbArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Connect, ping, and report
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let db_config = DatabaseConfig::from(args.db);

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;
    ping(&pool).await.context("Database connection failed")?;
    pool.close().await;

    println!("Database connection is successful");
    Ok(())
}
