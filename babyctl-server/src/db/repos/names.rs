//! Baby name repository
//!
//! One parameterized statement per operation against `baby_names`:
//! - update/get: RETURNING / fetch_optional, missing row is `NotFound`
//! - delete: zero rows affected is `NotFound`

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NameRecord, NewName};

const RESOURCE: &str = "baby name";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(id: i32) -> Self {
        Self::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }
    }
}

/// Storage gateway for baby name records.
#[async_trait]
pub trait NameStore: Send + Sync {
    /// All records, ordered by id.
    async fn list_all(&self) -> Result<Vec<NameRecord>, DbError>;

    async fn get_by_id(&self, id: i32) -> Result<NameRecord, DbError>;

    /// Insert a record and return it with its generated id.
    async fn insert(&self, name: NewName) -> Result<NameRecord, DbError>;

    /// Replace all non-id fields of an existing record.
    async fn update(&self, id: i32, name: NewName) -> Result<NameRecord, DbError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError>;
}

/// PostgreSQL-backed name store
#[derive(Clone)]
pub struct PgNameStore {
    pool: PgPool,
}

impl PgNameStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl NameStore for PgNameStore {
    async fn list_all(&self) -> Result<Vec<NameRecord>, DbError> {
        let rows = sqlx::query_as::<_, NameRecord>(
            "SELECT id, name, meaning, language FROM baby_names ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<NameRecord, DbError> {
        sqlx::query_as::<_, NameRecord>(
            "SELECT id, name, meaning, language FROM baby_names WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(id))
    }

    async fn insert(&self, name: NewName) -> Result<NameRecord, DbError> {
        let record = sqlx::query_as::<_, NameRecord>(
            r#"
            INSERT INTO baby_names (name, meaning, language)
            VALUES ($1, $2, $3)
            RETURNING id, name, meaning, language
            "#,
        )
        .bind(&name.name)
        .bind(&name.meaning)
        .bind(&name.language)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = record.id, "inserted baby name");
        Ok(record)
    }

    async fn update(&self, id: i32, name: NewName) -> Result<NameRecord, DbError> {
        sqlx::query_as::<_, NameRecord>(
            r#"
            UPDATE baby_names
            SET name = $1, meaning = $2, language = $3
            WHERE id = $4
            RETURNING id, name, meaning, language
            "#,
        )
        .bind(&name.name)
        .bind(&name.meaning)
        .bind(&name.language)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM baby_names WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(id));
        }
        Ok(())
    }
}
