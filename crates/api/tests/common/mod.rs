#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use bap_api::config::ServerConfig;
use bap_api::router::build_app_router;
use bap_api::state::AppState;
use bap_core::types::ReleaseDate;
use bap_db::models::store_app::NewStoreApp;
use bap_db::store::{InMemoryStoreAppStore, StoreAppStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never dialled; tests run against an in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn StoreAppStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub fn new_app(name: &str, category: &str, rating: f64, people: i32) -> NewStoreApp {
    NewStoreApp {
        name: name.to_string(),
        rating,
        people,
        category: category.to_string(),
        date: ReleaseDate::from_ymd_opt(2022, 9, 30).unwrap(),
        price: 1.99,
    }
}

/// Store holding the two "sun" apps: id 1 Sunrise (4.5, 1000), id 2 Sunset (3.0, 500).
pub async fn sun_store() -> Arc<InMemoryStoreAppStore> {
    let store = Arc::new(InMemoryStoreAppStore::new());
    store.insert(new_app("Sunrise", "Photo", 4.5, 1000)).await;
    store.insert(new_app("Sunset", "Photo", 3.0, 500)).await;
    store
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect the `id` field of every element in a JSON array body.
pub fn ids(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
