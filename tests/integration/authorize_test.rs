//! Integration tests for the gateway authorizer endpoint.

use axum::http::StatusCode;

use crate::helpers::TestApp;

const METHOD_ARN: &str =
    "arn:aws:execute-api:eu-west-1:123456789012:abcdef123/prod/GET/gallery/items";

#[tokio::test]
async fn live_session_yields_stage_wide_allow_policy() {
    let app = TestApp::new().await;
    app.register("alice@example.com", "password123").await;
    let token = app.login("alice@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/authorize",
            Some(serde_json::json!({
                "type": "TOKEN",
                "authorizationToken": token,
                "methodArn": METHOD_ARN,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.get("principalId").and_then(|v| v.as_str()),
        Some("alice@example.com")
    );
    assert_eq!(
        response.body.pointer("/policyDocument/Version").and_then(|v| v.as_str()),
        Some("2012-10-17")
    );
    assert_eq!(
        response
            .body
            .pointer("/policyDocument/Statement/0/Effect")
            .and_then(|v| v.as_str()),
        Some("Allow")
    );
    assert_eq!(
        response
            .body
            .pointer("/policyDocument/Statement/0/Action")
            .and_then(|v| v.as_str()),
        Some("execute-api:Invoke")
    );
    assert_eq!(
        response
            .body
            .pointer("/policyDocument/Statement/0/Resource/0")
            .and_then(|v| v.as_str()),
        Some("arn:aws:execute-api:eu-west-1:123456789012:abcdef123/prod/*/*")
    );
}

#[tokio::test]
async fn missing_and_empty_tokens_are_unauthorized() {
    let app = TestApp::new().await;

    for token in [serde_json::Value::Null, serde_json::json!("")] {
        let response = app
            .request(
                "POST",
                "/api/auth/authorize",
                Some(serde_json::json!({
                    "type": "TOKEN",
                    "authorizationToken": token,
                    "methodArn": METHOD_ARN,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn token_without_live_session_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/authorize",
            Some(serde_json::json!({
                "type": "TOKEN",
                "authorizationToken": "ey.fake.token",
                "methodArn": METHOD_ARN,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_method_arn_with_live_session_is_internal_error() {
    let app = TestApp::new().await;
    app.register("bob@example.com", "password123").await;
    let token = app.login("bob@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/authorize",
            Some(serde_json::json!({
                "type": "TOKEN",
                "authorizationToken": token,
                "methodArn": "arn:aws:execute-api:eu-west-1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}
