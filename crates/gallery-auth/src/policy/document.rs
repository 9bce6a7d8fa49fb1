//! IAM-shaped policy document emitted to the gateway.
//!
//! Policy grammar field names are capitalized (`Version`, `Statement`,
//! `Effect`, `Action`, `Resource`) while the envelope uses the gateway's
//! camelCase (`principalId`, `policyDocument`).

use serde::{Deserialize, Serialize};

use super::arn::MethodArn;

/// The policy grammar version in use.
const POLICY_VERSION: &str = "2012-10-17";

/// The only action this authorizer ever grants.
const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Statement effect. Only `Allow` exists in this system: denial is
/// signaled by failing the authorization call, never by a deny policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
}

/// A single policy statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    /// Statement effect.
    #[serde(rename = "Effect")]
    pub effect: Effect,
    /// Granted action.
    #[serde(rename = "Action")]
    pub action: String,
    /// Resource ARNs the statement applies to.
    #[serde(rename = "Resource")]
    pub resource: Vec<String>,
}

/// An IAM policy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// Policy grammar version.
    #[serde(rename = "Version")]
    pub version: String,
    /// Policy statements.
    #[serde(rename = "Statement")]
    pub statement: Vec<Statement>,
}

/// The capability grant returned to the gateway: a principal plus an
/// allow policy scoped to a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPolicy {
    /// The authenticated principal.
    #[serde(rename = "principalId")]
    pub principal_id: String,
    /// The granted policy.
    #[serde(rename = "policyDocument")]
    pub policy_document: PolicyDocument,
}

impl AuthPolicy {
    /// Builds an allow policy covering every method and path under the
    /// requested API stage.
    ///
    /// The grant is intentionally stage-wide rather than scoped to the
    /// single method+path that was requested; that is the contract this
    /// authorizer replicates.
    pub fn allow_stage(principal_id: &str, arn: &MethodArn) -> Self {
        let resource = format!(
            "arn:{}:execute-api:{}:{}:{}/{}/*/*",
            arn.partition, arn.region, arn.account_id, arn.rest_api_id, arn.stage
        );

        Self {
            principal_id: principal_id.to_string(),
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    effect: Effect::Allow,
                    action: INVOKE_ACTION.to_string(),
                    resource: vec![resource],
                }],
            },
        }
    }
}
