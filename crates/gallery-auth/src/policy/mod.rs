//! Gateway authorizer: method-ARN parsing and allow-policy synthesis.

pub mod arn;
pub mod document;
pub mod engine;

pub use arn::MethodArn;
pub use document::{AuthPolicy, PolicyDocument, Statement};
pub use engine::Authorizer;
