//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Account password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Gateway authorizer request, mirroring the token-authorizer event shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    /// Event type; always `"TOKEN"` for this authorizer.
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    /// The session token presented by the caller.
    #[serde(default)]
    pub authorization_token: Option<String>,
    /// The method ARN of the invoked gateway route.
    pub method_arn: String,
}

/// Gallery item creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGalleryItemRequest {
    /// Base64-encoded image bytes.
    pub image: String,
}

/// Query parameters for listing gallery items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGalleryQuery {
    /// Offset into the owner's items, newest first.
    #[serde(default)]
    pub from: usize,
    /// Page size.
    #[serde(default = "default_page_size")]
    pub size: usize,
}

fn default_page_size() -> usize {
    10
}
