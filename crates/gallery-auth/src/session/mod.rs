//! Session lifecycle management.

pub mod manager;

pub use manager::{RegisterOutcome, SessionManager};
