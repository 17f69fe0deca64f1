//! Router-level tests: the contact endpoint behind axum, with a recording sender.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use common::{RecordingSender, TestConfig};
use contact_mailer::{router, ContactHandler};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(sender: &RecordingSender) -> Router {
    router(Arc::new(ContactHandler::new(sender.clone(), TestConfig::new())))
}

async fn call(app: Router, method: Method, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_post_returns_ok_json() {
    let sender = RecordingSender::new();
    let body = json!({ "name": "Ana", "message": "Hola" }).to_string();

    let (status, json) = call(app(&sender), Method::POST, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "ok": true }));
    assert_eq!(sender.sent().await.len(), 1);
}

#[tokio::test]
async fn test_get_returns_405_json() {
    let sender = RecordingSender::new();
    let (status, json) = call(app(&sender), Method::GET, Body::empty()).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn test_empty_body_returns_400() {
    let sender = RecordingSender::new();
    let (status, json) = call(app(&sender), Method::POST, Body::empty()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "error": "Faltan datos para procesar la solicitud" })
    );
}

#[tokio::test]
async fn test_malformed_json_returns_400_not_500() {
    let sender = RecordingSender::new();
    let (status, _) = call(app(&sender), Method::POST, "{\"name\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(sender.sent().await.is_empty());
}

#[tokio::test]
async fn test_oversized_body_returns_400_json() {
    let sender = RecordingSender::new();
    let body = json!({ "message": "a".repeat(3 * 1024 * 1024) }).to_string();

    let (status, json) = call(app(&sender), Method::POST, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Mensaje demasiado largo" }));
    assert!(sender.sent().await.is_empty());
}

#[tokio::test]
async fn test_honeypot_returns_ok_without_sending() {
    let sender = RecordingSender::new();
    let body = json!({ "honeypot": "x" }).to_string();

    let (status, json) = call(app(&sender), Method::POST, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "ok": true }));
    assert!(sender.sent().await.is_empty());
}

#[tokio::test]
async fn test_provider_failure_returns_500() {
    let sender = RecordingSender::failing();
    let body = json!({ "message": "Hola" }).to_string();

    let (status, json) = call(app(&sender), Method::POST, body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "No se pudo enviar el correo" }));
}

#[tokio::test]
async fn test_health_check() {
    let sender = RecordingSender::new();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app(&sender).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}
