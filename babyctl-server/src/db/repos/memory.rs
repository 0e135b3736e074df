//! In-process name store
//!
//! Same contract as `PgNameStore`, held in a `BTreeMap` so listing stays
//! ordered by id. Ids start at 1 and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::names::{DbError, NameStore};
use crate::models::{NameRecord, NewName};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, NameRecord>,
    last_id: i32,
}

/// Name store backed by process memory
#[derive(Default)]
pub struct MemoryNameStore {
    inner: RwLock<Inner>,
}

impl MemoryNameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NameStore for MemoryNameStore {
    async fn list_all(&self) -> Result<Vec<NameRecord>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<NameRecord, DbError> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found(id))
    }

    async fn insert(&self, name: NewName) -> Result<NameRecord, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let record = name.with_id(inner.last_id);
        inner.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, name: NewName) -> Result<NameRecord, DbError> {
        let mut inner = self.inner.write().await;
        let slot = inner.rows.get_mut(&id).ok_or_else(|| DbError::not_found(id))?;
        *slot = name.with_id(id);
        Ok(slot.clone())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError> {
        let mut inner = self.inner.write().await;
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found(id))
    }
}
