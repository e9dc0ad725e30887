#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use sqlx::SqlitePool;

use garage_api::config::EnvironmentConfig;
use garage_api::database::DatabaseConnection;
use garage_api::{create_app_router, AppState};

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// App completa sobre una base SQLite en memoria
pub async fn create_test_app() -> Router {
    create_test_app_with_pool().await.0
}

/// Igual que `create_test_app`, devolviendo también el pool
pub async fn create_test_app_with_pool() -> (Router, SqlitePool) {
    let db = DatabaseConnection::in_memory()
        .await
        .expect("in-memory database");
    let pool = db.pool().clone();
    let app = create_app_router(AppState::new(pool.clone(), EnvironmentConfig::default()));
    (app, pool)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    match body {
        Some(json) => send_raw(app, method, uri, json.to_string()).await,
        None => {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            dispatch(app, request).await
        }
    }
}

/// Envía un cuerpo arbitrario como `application/json`, sea o no JSON válido
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: String) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse { status, body }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

pub fn assert_error_envelope(response: &TestResponse, status: StatusCode) {
    assert_eq!(response.status, status, "body: {}", response.body);
    assert_eq!(response.body["status"], "error");
    assert!(response.body["message"].is_string());
}
