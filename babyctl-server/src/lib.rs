//! babyctl-server: HTTP service for baby name records
//!
//! Five REST endpoints under `/babys`, each mapped onto one statement
//! against the `baby_names` table through a [`db::NameStore`].

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use db::{DbError, MemoryNameStore, NameStore, PgNameStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{NameRecord, NewName};
