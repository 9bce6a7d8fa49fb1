//! Integration test entry point.
//!
//! Each module exercises the HTTP API end to end against an app wired
//! with the in-memory cache, store, and gallery index.

mod helpers;

mod auth_test;
mod authorize_test;
mod gallery_test;
