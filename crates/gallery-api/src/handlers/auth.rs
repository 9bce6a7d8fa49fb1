//! Auth handlers — register, login, validate, authorize.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use validator::Validate;

use gallery_auth::policy::document::AuthPolicy;
use gallery_auth::session::manager::RegisterOutcome;
use gallery_core::error::AppError;

use crate::dto::request::{AuthorizeRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, ValidateResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    match state.sessions.register(&req.email, &req.password).await? {
        RegisterOutcome::Created => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::ok(MessageResponse {
                message: "Account created".to_string(),
            })),
        )),
        RegisterOutcome::AlreadyExists => {
            Err(AppError::conflict("An account with this email already exists").into())
        }
        RegisterOutcome::InvalidInput => {
            Err(AppError::validation("Email and password must not be blank").into())
        }
    }
}

/// POST /api/auth/login
///
/// Credentials arrive in an HTTP Basic `Authorization` header. A previous
/// session token may be presented in the `token` header; it is revoked as
/// part of the attempt.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let (email, password) = parse_basic_credentials(&headers)?;
    let existing_token = headers
        .get("token")
        .and_then(|v| v.to_str().ok())
        .filter(|t| !t.is_empty());

    let token = state
        .sessions
        .login(&email, &password, existing_token)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse { token })))
}

/// GET /api/auth/validate
pub async fn validate(auth: AuthUser) -> Json<ApiResponse<ValidateResponse>> {
    Json(ApiResponse::ok(ValidateResponse {
        principal: auth.principal,
    }))
}

/// POST /api/auth/authorize
///
/// The gateway authorizer endpoint: exchanges a token-authorizer event for
/// an IAM policy document granting the session's principal access to the
/// invoked stage.
pub async fn authorize(
    State(state): State<AppState>,
    Json(req): Json<AuthorizeRequest>,
) -> Result<Json<AuthPolicy>, ApiError> {
    let policy = state
        .authorizer
        .authorize(req.authorization_token.as_deref(), &req.method_arn)
        .await?;

    Ok(Json(policy))
}

/// Decodes the `Authorization: Basic ...` header into email and password.
fn parse_basic_credentials(headers: &HeaderMap) -> Result<(String, String), AppError> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::validation("Missing Authorization header"))?;

    let encoded = header
        .strip_prefix("Basic ")
        .ok_or_else(|| AppError::validation("Expected Basic authorization"))?;

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|_| AppError::validation("Authorization header is not valid base64"))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| AppError::validation("Authorization header is not valid UTF-8"))?;

    let (email, password) = decoded
        .split_once(':')
        .ok_or_else(|| AppError::validation("Expected 'email:password' credentials"))?;

    Ok((email.to_string(), password.to_string()))
}
