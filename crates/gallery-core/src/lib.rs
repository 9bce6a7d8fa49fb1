//! # gallery-core
//!
//! Core crate for AsciiGallery. Contains configuration schemas, the cache
//! boundary trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other gallery crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
