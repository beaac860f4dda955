//! Authentication test helpers

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use super::app::TestApp;

pub const TEST_PASSWORD: &str = "p1";

/// A signed-up account
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Sign up `name` as `<name>@x.com` and return the session
pub async fn signup(app: &TestApp, name: &str) -> TestUser {
    let email = format!("{name}@x.com");
    let response = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "name": name, "email": email, "password": TEST_PASSWORD }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "signup failed: {}", response.body);

    TestUser {
        id: response.body["user"]["id"].as_str().unwrap().parse().unwrap(),
        name: name.to_string(),
        email,
        token: response.body["token"].as_str().unwrap().to_string(),
    }
}

