//! Handlers for the `/api/StoreApps` resource.
//!
//! Every handler is a single read against the record store. Results are
//! projected to [`StoreAppDto`] before serialization. Collection queries
//! answer `200 []` when nothing matches; only the id lookup can 404.

use axum::extract::{Path, State};
use axum::Json;
use bap_core::error::CoreError;
use bap_core::filter::{StoreAppFilter, FIRST_TEN_LIMIT};
use bap_core::types::DbId;
use bap_db::models::store_app::{StoreApp, StoreAppDto};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn project(rows: Vec<StoreApp>) -> Json<Vec<StoreAppDto>> {
    Json(rows.into_iter().map(StoreAppDto::from).collect())
}

async fn filtered(state: &AppState, filter: StoreAppFilter) -> AppResult<Json<Vec<StoreAppDto>>> {
    let rows = state.store.find(&filter).await?;
    tracing::debug!(%filter, count = rows.len(), "Filtered store apps");
    Ok(project(rows))
}

/// GET /api/StoreApps
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<StoreAppDto>>> {
    let rows = state.store.list_all().await?;
    tracing::debug!(count = rows.len(), "Listed all store apps");
    Ok(project(rows))
}

/// GET /api/StoreApps/{search}
pub async fn search_by_name(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> AppResult<Json<Vec<StoreAppDto>>> {
    filtered(&state, StoreAppFilter::name_contains(&search)).await
}

/// GET /api/StoreApps/category/{category}
pub async fn search_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<StoreAppDto>>> {
    filtered(&state, StoreAppFilter::category_contains(&category)).await
}

/// GET /api/StoreApps/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StoreAppDto>> {
    let app = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StoreApp",
            id,
        }))?;
    Ok(Json(app.into()))
}

/// GET /api/StoreApps/rating/{rating}
///
/// Inclusive: a rating of `3.0` returns apps rated 3.0, 3.5, ... 5.0.
pub async fn list_min_rating(
    State(state): State<AppState>,
    Path(rating): Path<f64>,
) -> AppResult<Json<Vec<StoreAppDto>>> {
    filtered(&state, StoreAppFilter::min_rating(rating)).await
}

/// GET /api/StoreApps/people/{people}
pub async fn list_min_people(
    State(state): State<AppState>,
    Path(people): Path<i32>,
) -> AppResult<Json<Vec<StoreAppDto>>> {
    filtered(&state, StoreAppFilter::min_people(people)).await
}

/// GET /api/StoreApps/FirstTen
pub async fn first_ten(State(state): State<AppState>) -> AppResult<Json<Vec<StoreAppDto>>> {
    let rows = state.store.first_n(FIRST_TEN_LIMIT).await?;
    tracing::debug!(count = rows.len(), "Listed first store apps");
    Ok(project(rows))
}
