//! Database connection flags shared by every command

use clap::Args;

use babyctl_server::DatabaseConfig;

/// PostgreSQL connection arguments
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Full connection URL (overrides the individual --db-* flags)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "PGPORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "PGUSER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "PGPASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "PGDATABASE", default_value = "babynames")]
    pub db_name: String,

    /// SSL mode (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long, env = "PGSSLMODE", default_value = "disable")]
    pub db_ssl_mode: String,
}

impl From<DbArgs> for DatabaseConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            database_url: args.database_url,
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_password,
            dbname: args.db_name,
            ssl_mode: args.db_ssl_mode,
        }
    }
}
