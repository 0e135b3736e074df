//! Database connection pool management
//!
//! Uses sqlx PgPool with a fixed connection cap.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Maximum connections for the pool.
const MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the first
/// connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p babyctl-server -- --ignored

    fn config_from_env() -> DatabaseConfig {
        DatabaseConfig {
            database_url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(&config_from_env())
            .await
            .expect("pool creation failed");

        ping(&pool).await.expect("ping failed");
    }
}
