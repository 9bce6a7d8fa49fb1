//! Integration tests for registration, login, and token validation.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn register_then_login_succeeds() {
    let app = TestApp::new().await;
    app.register("alice@example.com", "password123").await;

    let token = app.login("alice@example.com", "password123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.register("bob@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "bob@example.com",
                "password": "another",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_wrong_password_and_unknown_email_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register("carol@example.com", "password123").await;

    let wrong_password = app.try_login("carol@example.com", "wrong", None).await;
    let unknown_email = app.try_login("nobody@example.com", "password123", None).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn login_revokes_the_presented_previous_token() {
    let app = TestApp::new().await;
    app.register("dave@example.com", "password123").await;

    let first = app.login("dave@example.com", "password123").await;

    let response = app
        .try_login("dave@example.com", "password123", Some(&first))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let second = response
        .body
        .pointer("/data/token")
        .and_then(|v| v.as_str())
        .unwrap()
        .to_string();
    assert_ne!(first, second);

    // The rotated-out token no longer validates.
    let stale = app
        .request("GET", "/api/auth/validate", None, Some(&first))
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);

    let fresh = app
        .request("GET", "/api/auth/validate", None, Some(&second))
        .await;
    assert_eq!(fresh.status, StatusCode::OK);
}

#[tokio::test]
async fn failed_login_still_revokes_the_presented_token() {
    let app = TestApp::new().await;
    app.register("erin@example.com", "password123").await;

    let token = app.login("erin@example.com", "password123").await;

    // Wrong password for an existing account: the attempt fails but the
    // presented session is destroyed anyway.
    let response = app
        .try_login("erin@example.com", "wrong", Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let stale = app
        .request("GET", "/api/auth/validate", None, Some(&token))
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn failed_login_for_unknown_account_keeps_the_presented_token() {
    let app = TestApp::new().await;
    app.register("frank@example.com", "password123").await;

    let token = app.login("frank@example.com", "password123").await;

    let response = app
        .try_login("ghost@example.com", "whatever", Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // No account was found, so no revocation ran.
    let live = app
        .request("GET", "/api/auth/validate", None, Some(&token))
        .await;
    assert_eq!(live.status, StatusCode::OK);
}

#[tokio::test]
async fn validate_returns_the_principal() {
    let app = TestApp::new().await;
    app.register("grace@example.com", "password123").await;
    let token = app.login("grace@example.com", "password123").await;

    let response = app
        .request("GET", "/api/auth/validate", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/principal").and_then(|v| v.as_str()),
        Some("grace@example.com")
    );
}

#[tokio::test]
async fn validate_rejects_garbage_and_missing_tokens() {
    let app = TestApp::new().await;

    let garbage = app
        .request("GET", "/api/auth/validate", None, Some("not-a-jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let missing = app.request("GET", "/api/auth/validate", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
}
