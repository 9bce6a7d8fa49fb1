//! # gallery-api
//!
//! HTTP API layer for AsciiGallery built on Axum.
//!
//! Provides the REST endpoints for registration, login, token validation,
//! the gateway authorizer, and the gallery itself, plus DTOs, extractors,
//! and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
