//! Route definitions for the `/StoreApps` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::store_app;
use crate::state::AppState;

/// Routes mounted at `/StoreApps`. Read-only; other methods answer 405.
///
/// ```text
/// GET    /                     -> list_all
/// GET    /FirstTen             -> first_ten
/// GET    /{search}             -> search_by_name
/// GET    /category/{category}  -> search_by_category
/// GET    /id/{id}              -> get_by_id
/// GET    /rating/{rating}      -> list_min_rating
/// GET    /people/{people}      -> list_min_people
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(store_app::list_all))
        .route("/FirstTen", get(store_app::first_ten))
        .route("/{search}", get(store_app::search_by_name))
        .route("/category/{category}", get(store_app::search_by_category))
        .route("/id/{id}", get(store_app::get_by_id))
        .route("/rating/{rating}", get(store_app::list_min_rating))
        .route("/people/{people}", get(store_app::list_min_people))
}
