//! # gallery-auth
//!
//! The authentication and session-authorization core of AsciiGallery.
//!
//! ## Modules
//!
//! - `password` — SHA-256 credential digesting and constant-time verification
//! - `jwt` — signed session token creation and validation
//! - `session` — session lifecycle: login with rotation, sliding-expiry
//!   lookup, registration
//! - `policy` — gateway authorizer: method-ARN parsing and stage-scoped
//!   allow-policy synthesis

pub mod jwt;
pub mod password;
pub mod policy;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use policy::{AuthPolicy, Authorizer, MethodArn};
pub use session::{RegisterOutcome, SessionManager};
