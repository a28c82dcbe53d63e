//! Record store abstraction used by the HTTP handlers.
//!
//! Handlers hold an `Arc<dyn StoreAppStore>` so the Postgres store can be
//! swapped for the in-memory one in tests.

mod memory;
mod postgres;

pub use memory::InMemoryStoreAppStore;
pub use postgres::PgStoreAppStore;

use async_trait::async_trait;
use bap_core::filter::StoreAppFilter;
use bap_core::types::DbId;

use crate::models::store_app::StoreApp;

/// Failure reading from a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read-only access to store-app records.
///
/// Every collection method returns rows ordered by id ascending. An empty
/// result is a valid answer, never an error.
#[async_trait]
pub trait StoreAppStore: Send + Sync {
    /// Every record.
    async fn list_all(&self) -> Result<Vec<StoreApp>, StoreError>;

    /// Records matching a single filter criterion.
    async fn find(&self, filter: &StoreAppFilter) -> Result<Vec<StoreApp>, StoreError>;

    /// The record with the given id, if any.
    async fn find_by_id(&self, id: DbId) -> Result<Option<StoreApp>, StoreError>;

    /// The first `limit` records by id.
    async fn first_n(&self, limit: i64) -> Result<Vec<StoreApp>, StoreError>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
