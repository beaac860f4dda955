//! Root route, fallback and error rendering

#![cfg(feature = "ssr")]

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{test_config, TestApp};
use connectx::backend::ServerConfig;
use connectx::shared::api::ServiceInfo;

fn production_app() -> TestApp {
    TestApp::with_config(ServerConfig {
        production: true,
        ..test_config()
    })
}

#[tokio::test]
async fn test_service_info() {
    let app = TestApp::new();

    let response = app.get("/", None).await;
    assert_status!(response, StatusCode::OK);

    let info: ServiceInfo = response.json();
    assert_eq!(info.message, "Connect X API");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(info.endpoints.auth, "/api/auth");
    assert_eq!(info.endpoints.connections, "/api/connections");
}

#[tokio::test]
async fn test_unknown_route_in_development_has_stack() {
    let app = TestApp::new();

    let response = app.get("/api/nothing-here", None).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Route not found");
    assert!(response.body["stack"].is_string());
}

#[tokio::test]
async fn test_unknown_route_in_production_hides_stack() {
    let app = production_app();

    let response = app.get("/api/nothing-here", None).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Route not found");
    assert_eq!(response.body["stack"], Value::Null);
}

#[tokio::test]
async fn test_handler_errors_keep_message_in_production() {
    let app = production_app();

    let response = app
        .post("/api/auth/login", None, json!({ "email": "ghost@x.com", "password": "p1" }))
        .await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Invalid email or password");
    assert_eq!(response.body["stack"], Value::Null);
}

#[tokio::test]
async fn test_method_not_allowed_is_json() {
    let app = TestApp::new();

    let response = app.request(Method::PATCH, "/api/posts", None, None).await;
    assert_error!(response, StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    assert_eq!(
        response.headers.get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.send(request).await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
