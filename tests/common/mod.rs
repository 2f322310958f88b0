#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use storefront_api::config::{DEFAULT_BIND_ADDR, DEFAULT_MAX_BODY_BYTES};
use storefront_api::{app, connect, ensure_tables, AppConfig, AppState};
use tower::ServiceExt;

pub fn memory_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        bind_addr: DEFAULT_BIND_ADDR.parse().unwrap(),
        max_connections: 1,
        max_body_bytes: DEFAULT_MAX_BODY_BYTES,
    }
}

pub async fn create_test_app() -> Router {
    let config = memory_config();
    let pool = connect(&config).await.unwrap();
    ensure_tables(&pool).await.unwrap();
    app(AppState { pool }, config.max_body_bytes)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn not_found_body() -> Value {
    serde_json::json!({ "message": "content not found in database" })
}

pub fn ann() -> Value {
    serde_json::json!({
        "name": "Ann",
        "second_name": "Lee",
        "email": "a@x.com",
        "password": "pw"
    })
}

pub fn lamp() -> Value {
    serde_json::json!({ "name": "Lamp", "description": "Desk lamp" })
}

/// Creates one user and one product, returning their ids.
pub async fn seed_user_and_product(app: &Router) -> (i64, i64) {
    let (_, user) = send(app, "POST", "/users/", Some(ann())).await;
    let (_, product) = send(app, "POST", "/products/", Some(lamp())).await;
    (user["id"].as_i64().unwrap(), product["id"].as_i64().unwrap())
}
