//! Opportunities and applications

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{signup, TestApp, TestUser};
use connectx::shared::models::{Opportunity, OpportunityKind};

async fn create_opportunity(app: &TestApp, user: &TestUser) -> Opportunity {
    let response = app
        .post(
            "/api/opportunities",
            Some(&user.token),
            json!({
                "title": "Backend Intern",
                "company": "Acme",
                "description": "Write services",
                "location": "Remote",
                "kind": "internship",
            }),
        )
        .await;
    assert_status!(response, StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_create_and_get_opportunity() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    let created = create_opportunity(&app, &alice).await;
    assert_eq!(created.author, alice.id);
    assert_eq!(created.kind, OpportunityKind::Internship);
    assert!(created.applicants.is_empty());

    let fetched: Opportunity = app
        .get(&format!("/api/opportunities/{}", created.id), None)
        .await
        .json();
    assert_eq!(fetched, created);

    let listed: Vec<Opportunity> = app.get("/api/opportunities", None).await.json();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_kind_defaults_to_job() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    let response = app
        .post(
            "/api/opportunities",
            Some(&alice.token),
            json!({ "title": "Engineer", "company": "Acme", "description": "Build" }),
        )
        .await;
    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["kind"], "job");
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    let response = app
        .post(
            "/api/opportunities",
            Some(&alice.token),
            json!({ "title": "", "company": "Acme", "description": "Build" }),
        )
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "title is required");

    let response = app
        .post(
            "/api/opportunities",
            None,
            json!({ "title": "Engineer", "company": "Acme", "description": "Build" }),
        )
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_apply_once() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;
    let bob = signup(&app, "bob").await;
    let opportunity = create_opportunity(&app, &alice).await;
    let apply_uri = format!("/api/opportunities/{}/apply", opportunity.id);

    let response = app.post(&apply_uri, Some(&bob.token), json!({})).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Opportunity>().applicants, vec![bob.id]);

    let response = app.post(&apply_uri, Some(&bob.token), json!({})).await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Already applied to this opportunity");
}

#[tokio::test]
async fn test_cannot_apply_to_own_opportunity() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;
    let opportunity = create_opportunity(&app, &alice).await;

    let response = app
        .post(
            &format!("/api/opportunities/{}/apply", opportunity.id),
            Some(&alice.token),
            json!({}),
        )
        .await;
    assert_error!(
        response,
        StatusCode::BAD_REQUEST,
        "You cannot apply to your own opportunity"
    );
}

#[tokio::test]
async fn test_missing_opportunity() {
    let app = TestApp::new();
    let bob = signup(&app, "bob").await;
    let missing = uuid::Uuid::new_v4();

    let response = app.get(&format!("/api/opportunities/{missing}"), None).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Opportunity not found");

    let response = app
        .post(&format!("/api/opportunities/{missing}/apply"), Some(&bob.token), json!({}))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "Opportunity not found");
}
