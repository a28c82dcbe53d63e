pub mod health;
pub mod store_app;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /StoreApps                        all records
/// /StoreApps/FirstTen               first ten by id
/// /StoreApps/{search}               name substring search
/// /StoreApps/category/{category}    category substring search
/// /StoreApps/id/{id}                single record
/// /StoreApps/rating/{rating}        rating at or above
/// /StoreApps/people/{people}        people at or above
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/StoreApps", store_app::router())
}
