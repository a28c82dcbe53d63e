//! Error-path tests: store failures, malformed path parameters, and the
//! absence of any write path.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use bap_core::filter::StoreAppFilter;
use bap_core::types::DbId;
use bap_db::models::store_app::StoreApp;
use bap_db::store::{StoreAppStore, StoreError};
use common::{body_json, get, send, sun_store};

/// A store whose backing database is gone.
struct UnavailableStore;

#[async_trait]
impl StoreAppStore for UnavailableStore {
    async fn list_all(&self) -> Result<Vec<StoreApp>, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn find(&self, _filter: &StoreAppFilter) -> Result<Vec<StoreApp>, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<StoreApp>, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn first_n(&self, _limit: i64) -> Result<Vec<StoreApp>, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_returns_sanitized_500() {
    let app = common::build_test_app(Arc::new(UnavailableStore));

    let response = get(app, "/api/StoreApps/category/photo").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn store_failure_on_id_lookup_is_not_a_404() {
    let app = common::build_test_app(Arc::new(UnavailableStore));

    let response = get(app, "/api/StoreApps/id/1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_degraded_when_store_is_down() {
    let app = common::build_test_app(Arc::new(UnavailableStore));

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Malformed path parameters are rejected before reaching the store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let app = common::build_test_app(sun_store().await);

    let response = get(app, "/api/StoreApps/id/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_rating_returns_400() {
    let app = common::build_test_app(sun_store().await);

    let response = get(app, "/api/StoreApps/rating/high").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn fractional_people_returns_400() {
    let app = common::build_test_app(sun_store().await);

    let response = get(app, "/api/StoreApps/people/2.5").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// No write path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_is_not_allowed() {
    let app = common::build_test_app(sun_store().await);

    let response = send(app, Method::POST, "/api/StoreApps").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn delete_is_not_allowed() {
    let store = sun_store().await;
    let app = common::build_test_app(store.clone());

    let response = send(app, Method::DELETE, "/api/StoreApps/id/1").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(store.len().await, 2);
}
