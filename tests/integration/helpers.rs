//! Shared helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tower::ServiceExt;

use gallery_api::{AppState, build_router};
use gallery_core::config::AppConfig;

/// Test application wired with in-memory providers.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Builds the app with the in-memory cache, store, and gallery index.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.store.provider = "memory".to_string();
        config.cache.provider = "memory".to_string();
        config.gallery.recognition.provider = "none".to_string();
        config.gallery.index.provider = "memory".to_string();

        let state = AppState::initialize(config)
            .await
            .expect("Failed to initialize test app state");

        Self {
            router: build_router(state),
        }
    }

    /// Registers an account, asserting success.
    pub async fn register(&self, email: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Logs in with HTTP Basic credentials, asserting success, and
    /// returns the issued session token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.try_login(email, password, None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .pointer("/data/token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Attempts a login, optionally presenting a previous session token
    /// in the `token` header. Returns the raw response.
    pub async fn try_login(
        &self,
        email: &str,
        password: &str,
        existing_token: Option<&str>,
    ) -> TestResponse {
        let credentials = STANDARD.encode(format!("{email}:{password}"));

        let mut req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header("Authorization", format!("Basic {credentials}"));

        if let Some(token) = existing_token {
            req = req.header("token", token);
        }

        let req = req.body(Body::empty()).expect("Failed to build request");
        self.send(req).await
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

/// A small valid PNG, base64-encoded, for gallery uploads.
pub fn png_base64() -> String {
    let img = image::RgbImage::from_fn(16, 16, |x, y| image::Rgb([(x * 16) as u8, (y * 16) as u8, 128]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("Failed to encode test image");
    STANDARD.encode(bytes)
}
