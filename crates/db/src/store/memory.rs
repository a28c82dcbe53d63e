use async_trait::async_trait;
use bap_core::filter::StoreAppFilter;
use bap_core::types::DbId;
use tokio::sync::RwLock;

use super::{StoreAppStore, StoreError};
use crate::models::store_app::{NewStoreApp, StoreApp};

/// [`StoreAppStore`] over a vector of rows, for tests and local fakes.
///
/// Ids are assigned sequentially from 1 on insert, so insertion order and
/// id order coincide.
#[derive(Default)]
pub struct InMemoryStoreAppStore {
    rows: RwLock<Vec<StoreApp>>,
}

impl InMemoryStoreAppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record and return it with its assigned id.
    pub async fn insert(&self, app: NewStoreApp) -> StoreApp {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |last| last.id + 1);
        let row = app.with_id(id);
        rows.push(row.clone());
        row
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl StoreAppStore for InMemoryStoreAppStore {
    async fn list_all(&self) -> Result<Vec<StoreApp>, StoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find(&self, filter: &StoreAppFilter) -> Result<Vec<StoreApp>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|row| filter.matches(*row)).cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<StoreApp>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn first_n(&self, limit: i64) -> Result<Vec<StoreApp>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let rows = self.rows.read().await;
        Ok(rows.iter().take(limit).cloned().collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
