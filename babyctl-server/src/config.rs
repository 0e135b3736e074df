//! Database connection configuration
//!
//! Populated once at startup (CLI flags / environment) and handed to
//! [`crate::db::create_pool`].

use std::fmt;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// PostgreSQL connection parameters
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection URL; when set, the individual fields are ignored
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    /// libpq-style sslmode (`disable`, `prefer`, `require`, ...)
    pub ssl_mode: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            dbname: "babynames".to_string(),
            ssl_mode: "disable".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Build sqlx connect options.
    ///
    /// # Errors
    ///
    /// Returns an error if `database_url` or `ssl_mode` cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.database_url {
            return PgConnectOptions::from_str(url);
        }

        let ssl_mode = PgSslMode::from_str(&self.ssl_mode)?;
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.dbname)
            .ssl_mode(ssl_mode);

        if !self.password.is_empty() {
            options = options.password(&self.password);
        }

        Ok(options)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_map_to_connect_options() {
        let config = DatabaseConfig {
            host: "db.internal".into(),
            port: 6543,
            user: "names".into(),
            password: "secret".into(),
            dbname: "registry".into(),
            ..Default::default()
        };

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "names");
        assert_eq!(options.get_database(), Some("registry"));
    }

    #[test]
    fn url_overrides_fields() {
        let config = DatabaseConfig {
            database_url: Some("postgres://alice@remote:5555/other".into()),
            ..Default::default()
        };

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "remote");
        assert_eq!(options.get_port(), 5555);
        assert_eq!(options.get_database(), Some("other"));
    }

    #[test]
    fn invalid_ssl_mode_is_rejected() {
        let config = DatabaseConfig {
            ssl_mode: "sometimes".into(),
            ..Default::default()
        };
        assert!(config.connect_options().is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let config = DatabaseConfig {
            password: "hunter2".into(),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
    }
}
