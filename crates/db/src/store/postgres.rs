use async_trait::async_trait;
use bap_core::filter::StoreAppFilter;
use bap_core::types::DbId;

use super::{StoreAppStore, StoreError};
use crate::models::store_app::StoreApp;
use crate::repositories::StoreAppRepo;
use crate::DbPool;

/// [`StoreAppStore`] backed by the `store_apps` Postgres table.
#[derive(Clone)]
pub struct PgStoreAppStore {
    pool: DbPool,
}

impl PgStoreAppStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreAppStore for PgStoreAppStore {
    async fn list_all(&self) -> Result<Vec<StoreApp>, StoreError> {
        Ok(StoreAppRepo::list_all(&self.pool).await?)
    }

    async fn find(&self, filter: &StoreAppFilter) -> Result<Vec<StoreApp>, StoreError> {
        Ok(StoreAppRepo::find(&self.pool, filter).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<StoreApp>, StoreError> {
        Ok(StoreAppRepo::find_by_id(&self.pool, id).await?)
    }

    async fn first_n(&self, limit: i64) -> Result<Vec<StoreApp>, StoreError> {
        Ok(StoreAppRepo::list_first(&self.pool, limit).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
