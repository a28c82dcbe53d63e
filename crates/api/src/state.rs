use std::sync::Arc;

use bap_db::store::StoreAppStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store the query handlers read from.
    pub store: Arc<dyn StoreAppStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
