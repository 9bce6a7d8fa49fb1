//! Integration tests for the gallery endpoints.

use axum::http::StatusCode;

use crate::helpers::{TestApp, png_base64};

#[tokio::test]
async fn create_list_delete_gallery_item() {
    let app = TestApp::new().await;
    app.register("alice@example.com", "password123").await;
    let token = app.login("alice@example.com", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/gallery",
            Some(serde_json::json!({ "image": png_base64() })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let id = created
        .body
        .pointer("/data/id")
        .and_then(|v| v.as_str())
        .expect("No id in create response")
        .to_string();
    assert!(
        created
            .body
            .pointer("/data/ascii")
            .and_then(|v| v.as_str())
            .is_some_and(|a| !a.is_empty())
    );

    let listed = app.request("GET", "/api/gallery", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(
        listed.body.pointer("/data").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(1)
    );

    let deleted = app
        .request("DELETE", &format!("/api/gallery/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let after = app.request("GET", "/api/gallery", None, Some(&token)).await;
    assert_eq!(
        after.body.pointer("/data").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(0)
    );
}

#[tokio::test]
async fn gallery_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/gallery", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/api/gallery",
            Some(serde_json::json!({ "image": png_base64() })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_image_payload_is_a_bad_request() {
    let app = TestApp::new().await;
    app.register("bob@example.com", "password123").await;
    let token = app.login("bob@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/gallery",
            Some(serde_json::json!({ "image": "!!not-base64!!" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn owners_cannot_touch_each_others_items() {
    let app = TestApp::new().await;
    app.register("carol@example.com", "password123").await;
    app.register("mallory@example.com", "password123").await;
    let carol = app.login("carol@example.com", "password123").await;
    let mallory = app.login("mallory@example.com", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/gallery",
            Some(serde_json::json!({ "image": png_base64() })),
            Some(&carol),
        )
        .await;
    let id = created
        .body
        .pointer("/data/id")
        .and_then(|v| v.as_str())
        .unwrap()
        .to_string();

    // Mallory sees an empty gallery and cannot delete Carol's item.
    let listed = app.request("GET", "/api/gallery", None, Some(&mallory)).await;
    assert_eq!(
        listed.body.pointer("/data").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(0)
    );

    let deleted = app
        .request("DELETE", &format!("/api/gallery/{id}"), None, Some(&mallory))
        .await;
    assert_eq!(deleted.status, StatusCode::NOT_FOUND);

    let still_there = app.request("GET", "/api/gallery", None, Some(&carol)).await;
    assert_eq!(
        still_there.body.pointer("/data").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(1)
    );
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/status").and_then(|v| v.as_str()),
        Some("ok")
    );
}
