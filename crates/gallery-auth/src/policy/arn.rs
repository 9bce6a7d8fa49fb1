//! Method ARN parsing.
//!
//! An inbound authorization request names its target as a fully-qualified
//! resource identifier:
//!
//! ```text
//! arn:partition:service:region:accountId:restApiId/stage/httpMethod[/resourcePath]
//! ```

use gallery_core::error::AppError;
use gallery_core::result::AppResult;

/// A parsed gateway method ARN.
///
/// By the time an ARN reaches the decision engine it has been produced by
/// the gateway itself, so a shape violation is an internal invariant
/// failure, not a client error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodArn {
    /// ARN partition (e.g. `aws`).
    pub partition: String,
    /// Region hosting the API.
    pub region: String,
    /// Account that owns the API.
    pub account_id: String,
    /// The REST API identifier.
    pub rest_api_id: String,
    /// Deployment stage.
    pub stage: String,
    /// HTTP method of the request.
    pub http_method: String,
    /// Resource path below the stage. Empty for the service root.
    pub resource_path: String,
}

impl MethodArn {
    /// Parses a method ARN into its six colon-delimited segments, then
    /// splits the gateway segment on slashes.
    ///
    /// A missing resource path is the service root, not an error.
    pub fn parse(arn: &str) -> AppResult<Self> {
        let segments: Vec<&str> = arn.split(':').collect();
        if segments.len() != 6 {
            return Err(AppError::internal(format!(
                "Method ARN does not have 6 segments: '{arn}'"
            )));
        }

        let gateway_part = segments[5].trim_end_matches('/');
        let mut gateway = gateway_part.splitn(4, '/');
        let (Some(rest_api_id), Some(stage), Some(http_method)) =
            (gateway.next(), gateway.next(), gateway.next())
        else {
            return Err(AppError::internal(format!(
                "Method ARN gateway segment is incomplete: '{gateway_part}'"
            )));
        };
        let resource_path = gateway.next().unwrap_or("");

        if rest_api_id.is_empty() || stage.is_empty() || http_method.is_empty() {
            return Err(AppError::internal(format!(
                "Method ARN gateway segment has empty parts: '{gateway_part}'"
            )));
        }

        Ok(Self {
            partition: segments[1].to_string(),
            region: segments[3].to_string(),
            account_id: segments[4].to_string(),
            rest_api_id: rest_api_id.to_string(),
            stage: stage.to_string(),
            http_method: http_method.to_string(),
            resource_path: resource_path.to_string(),
        })
    }
}
