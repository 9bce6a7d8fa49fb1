//! The authorization decision engine.

use std::sync::Arc;

use tracing::{debug, info};

use gallery_core::error::AppError;
use gallery_core::result::AppResult;

use crate::session::SessionManager;

use super::arn::MethodArn;
use super::document::AuthPolicy;

/// Derives a scoped allow decision from an inbound authorization context,
/// or fails closed.
///
/// Stateless per call; the only persistent state touched is the session
/// cache, whose entry is refreshed on a hit.
#[derive(Debug, Clone)]
pub struct Authorizer {
    sessions: Arc<SessionManager>,
}

impl Authorizer {
    /// Creates a new authorizer over the given session manager.
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }

    /// Authorizes a request against a target method ARN.
    ///
    /// 1. No token → `Unauthorized`.
    /// 2. No live session for the token → `Unauthorized` (fails closed,
    ///    even if the token's signature would still verify).
    /// 3. Principal re-derived from the signed claims; failure here is an
    ///    internal invariant violation.
    /// 4. The ARN is parsed and an allow policy covering the whole stage
    ///    is emitted.
    pub async fn authorize(
        &self,
        token: Option<&str>,
        method_arn: &str,
    ) -> AppResult<AuthPolicy> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        let principal = match self.sessions.validate_session(token).await {
            Ok(principal) => principal,
            Err(e) => {
                info!(kind = %e.kind, "Authorization rejected");
                return Err(e);
            }
        };

        let arn = MethodArn::parse(method_arn)?;
        debug!(
            principal = %principal,
            stage = %arn.stage,
            "Issuing stage-scoped allow policy"
        );

        Ok(AuthPolicy::allow_stage(&principal, &arn))
    }
}
