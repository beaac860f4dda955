//! Feed posts, likes and comments

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::{signup, TestApp, TestUser};
use connectx::shared::models::Post;

async fn create_post(app: &TestApp, user: &TestUser, content: &str) -> Post {
    let response = app
        .post("/api/posts", Some(&user.token), json!({ "content": content }))
        .await;
    assert_status!(response, StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_feed_scenario() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;
    let bob = signup(&app, "bob").await;

    let post = create_post(&app, &alice, "hello").await;
    assert_eq!(post.author, alice.id);
    assert_eq!(post.author_name, "alice");

    let response = app
        .post(&format!("/api/posts/{}/like", post.id), Some(&bob.token), json!({}))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Post>().likes, vec![bob.id]);

    let response = app
        .post(
            &format!("/api/posts/{}/comment", post.id),
            Some(&bob.token),
            json!({ "text": "nice" }),
        )
        .await;
    assert_status!(response, StatusCode::OK);
    let post: Post = response.json();
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.comments[0].author, bob.id);
    assert_eq!(post.comments[0].text, "nice");

    let response = app.get("/api/posts", None).await;
    let feed: Vec<Post> = response.json();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].likes, vec![bob.id]);
    assert_eq!(feed[0].comments.len(), 1);

    let response = app.delete(&format!("/api/posts/{}", post.id), Some(&bob.token)).await;
    assert_error!(response, StatusCode::FORBIDDEN, "Not authorized to delete this post");

    let response = app.delete(&format!("/api/posts/{}", post.id), Some(&alice.token)).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.message(), "Post removed");

    let response = app.get(&format!("/api/posts/{}", post.id), None).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_feed_is_newest_first() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    create_post(&app, &alice, "first").await;
    create_post(&app, &alice, "second").await;

    let feed: Vec<Post> = app.get("/api/posts", None).await.json();
    let contents: Vec<&str> = feed.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(contents, vec!["second", "first"]);
}

#[tokio::test]
async fn test_create_post_validation() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    let response = app.post("/api/posts", None, json!({ "content": "hi" })).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);

    let response = app
        .post("/api/posts", Some(&alice.token), json!({ "content": "   " }))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "content is required");
}

#[tokio::test]
async fn test_like_is_idempotent_and_unlike_removes() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;
    let post = create_post(&app, &alice, "hello").await;
    let like_uri = format!("/api/posts/{}/like", post.id);

    app.post(&like_uri, Some(&alice.token), json!({})).await;
    let response = app.post(&like_uri, Some(&alice.token), json!({})).await;
    assert_eq!(response.json::<Post>().likes, vec![alice.id]);

    let response = app.delete(&like_uri, Some(&alice.token)).await;
    assert_status!(response, StatusCode::OK);
    assert!(response.json::<Post>().likes.is_empty());
}

#[tokio::test]
async fn test_missing_post_operations() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;
    let missing = Uuid::new_v4();

    let response = app
        .post(&format!("/api/posts/{missing}/like"), Some(&alice.token), json!({}))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "Post not found");

    let response = app
        .post(
            &format!("/api/posts/{missing}/comment"),
            Some(&alice.token),
            json!({ "text": "hi" }),
        )
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "Post not found");

    let response = app.delete(&format!("/api/posts/{missing}"), Some(&alice.token)).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_comment_requires_text() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;
    let post = create_post(&app, &alice, "hello").await;

    let response = app
        .post(
            &format!("/api/posts/{}/comment", post.id),
            Some(&alice.token),
            json!({ "text": "" }),
        )
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "text is required");
}

#[tokio::test]
async fn test_signup_login_like_twice() {
    let app = TestApp::new();
    let alice = signup(&app, "alice").await;

    let response = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": alice.email, "password": common::TEST_PASSWORD }),
        )
        .await;
    assert_status!(response, StatusCode::OK);
    let relogin_token = response.body["token"].as_str().unwrap().to_string();

    for token in [&alice.token, &relogin_token] {
        assert_status!(app.get("/api/auth/me", Some(token)).await, StatusCode::OK);
    }

    let post = create_post(&app, &alice, "hello").await;
    assert!(post.likes.is_empty());
    assert!(post.comments.is_empty());

    let like_uri = format!("/api/posts/{}/like", post.id);
    let liked: Post = app.post(&like_uri, Some(&relogin_token), json!({})).await.json();
    assert_eq!(liked.likes, vec![alice.id]);

    let again: Post = app.post(&like_uri, Some(&alice.token), json!({})).await.json();
    assert_eq!(again.likes, vec![alice.id]);
}
