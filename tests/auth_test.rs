//! Signup, login and the `/me` endpoint

#![cfg(feature = "ssr")]

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

use common::{signup, TestApp, TEST_PASSWORD};
use connectx::backend::auth::TokenService;
use connectx::shared::api::AuthResponse;

#[tokio::test]
async fn test_signup_returns_token_and_profile() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "name": "Alice", "email": "  Alice@X.com ", "password": "p1" }),
        )
        .await;
    assert_status!(response, StatusCode::CREATED);

    let auth: AuthResponse = response.json();
    assert_eq!(auth.user.name, "Alice");
    assert_eq!(auth.user.email, "alice@x.com");
    assert!(!auth.token.is_empty());
    assert!(response.body["user"].get("passwordHash").is_none());
    assert!(response.body["user"].get("password").is_none());
    assert_eq!(app.state.tokens.user_id(&auth.token).unwrap(), auth.user.id);
}

#[tokio::test]
async fn test_signup_name_defaults_to_email_local_part() {
    let app = TestApp::new();

    let response = app
        .post("/api/auth/signup", None, json!({ "email": "bob@x.com", "password": "p1" }))
        .await;
    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["user"]["name"], "bob");
}

#[tokio::test]
async fn test_signup_duplicate_email_rejected() {
    let app = TestApp::new();
    signup(&app, "alice").await;

    let response = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "email": "ALICE@x.com", "password": "other" }),
        )
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "User already exists");
}

#[tokio::test]
async fn test_signup_validation() {
    let app = TestApp::new();

    let response = app
        .post("/api/auth/signup", None, json!({ "email": "not-an-email", "password": "p1" }))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid email format");

    let response = app
        .post("/api/auth/signup", None, json!({ "email": "carol@x.com", "password": "" }))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Password is required");

    let response = app
        .post("/api/auth/signup", None, json!({ "email": "carol@x.com" }))
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_accepts_form_body() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/signup")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Dana&email=dana%40x.com&password=p1"))
        .unwrap();
    let response = app.send(request).await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["user"]["email"], "dana@x.com");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    let response = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "Alice@x.com", "password": TEST_PASSWORD }),
        )
        .await;
    assert_status!(response, StatusCode::OK);

    let auth: AuthResponse = response.json();
    assert_eq!(auth.user.id, alice.id);
    assert_eq!(app.state.tokens.user_id(&auth.token).unwrap(), alice.id);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    signup(&app, "alice").await;

    let wrong_password = app
        .post("/api/auth/login", None, json!({ "email": "alice@x.com", "password": "nope" }))
        .await;
    assert_error!(wrong_password, StatusCode::UNAUTHORIZED, "Invalid email or password");

    let unknown_email = app
        .post("/api/auth/login", None, json!({ "email": "ghost@x.com", "password": "p1" }))
        .await;
    assert_error!(unknown_email, StatusCode::UNAUTHORIZED, "Invalid email or password");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new();

    let response = app.get("/api/auth/me", None).await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Not authorized, no token");

    let response = app.get("/api/auth/me", Some("garbage")).await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Not authorized, token failed");
}

#[tokio::test]
async fn test_me_returns_caller() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    let response = app.get("/api/auth/me", Some(&alice.token)).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["id"], alice.id.to_string());
    assert_eq!(response.body["email"], "alice@x.com");
}

#[tokio::test]
async fn test_token_for_deleted_user_rejected() {
    let app = TestApp::new();
    let token = app
        .state
        .tokens
        .create_token(uuid::Uuid::new_v4(), "ghost@x.com")
        .unwrap();

    let response = app.get("/api/auth/me", Some(&token)).await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Not authorized, user not found");
}

#[tokio::test]
async fn test_tampered_token_rejected_on_protected_routes() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    // Same claims, signed with a key the server does not hold
    let tampered = TokenService::new("forged-secret", Duration::from_secs(3600))
        .create_token(alice.id, &alice.email)
        .unwrap();

    for (method, uri) in [
        (Method::GET, "/api/auth/me"),
        (Method::GET, "/api/users/suggested"),
        (Method::GET, "/api/connections"),
        (Method::GET, "/api/messages/conversations"),
    ] {
        let response = app.request(method, uri, Some(&tampered), None).await;
        assert_error!(response, StatusCode::UNAUTHORIZED, "Not authorized, token failed");
    }

    let response = app
        .post("/api/posts", Some(&tampered), json!({ "content": "hi" }))
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}
